mod grammar_good;
