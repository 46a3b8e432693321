use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("valid regex");
    static ref ENGLISH_STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Built-in stopword set for a language tag. Only "english" ships; anything
/// else is a configuration error surfaced to the caller.
pub fn stopwords(language: &str) -> Result<&'static HashSet<&'static str>> {
    match language {
        "english" => Ok(&ENGLISH_STOPWORDS),
        other => bail!("no stopword list for language {other:?}"),
    }
}

/// Normalize raw text into word tokens: NFKC, lowercase, strip punctuation
/// without substitution ("don't" becomes "dont"), strip digit runs, split on
/// whitespace, drop stopwords. Pure; empty input yields an empty sequence.
pub fn normalize(text: &str, stopwords: &HashSet<&str>) -> Vec<String> {
    let lowered = text.nfkc().collect::<String>().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let stripped = DIGIT_RUN.replace_all(&stripped, "");
    stripped
        .split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}
