//! Rule-based English lemmatizer.
//!
//! An irregular-form table first, then suffix stripping modelled on the
//! Porter step 1 rules: plural `-s/-es/-ies`, past `-ed/-ied`, progressive
//! `-ing`, with `e` restoration and double-consonant undoubling.

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("felt", "feel"),
    ("made", "make"),
    ("said", "say"),
    ("paid", "pay"),
    ("lost", "lose"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("got", "get"),
    ("gotten", "get"),
    ("knew", "know"),
    ("known", "know"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("eating", "eat"),
    ("slept", "sleep"),
    ("kept", "keep"),
    ("met", "meet"),
    ("sat", "sit"),
    ("spent", "spend"),
    ("told", "tell"),
    ("taught", "teach"),
    ("thought", "think"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("caught", "catch"),
    ("understood", "understand"),
    ("used", "use"),
    ("lying", "lie"),
    ("dying", "die"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("always", "always"),
    ("news", "news"),
    ("morning", "morning"),
    ("evening", "evening"),
    ("nothing", "nothing"),
    ("something", "something"),
    ("anything", "anything"),
    ("everything", "everything"),
];

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

/// Porter measure: the number of vowel→consonant transitions
fn measure(chars: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let consonant = is_consonant(chars, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

fn has_vowel(chars: &[char]) -> bool {
    (0..chars.len()).any(|i| !is_consonant(chars, i))
}

fn ends_double_consonant(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(chars, n - 1)
}

/// consonant-vowel-consonant ending, last letter not w/x/y
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && is_consonant(chars, n - 3)
        && !is_consonant(chars, n - 2)
        && is_consonant(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}

/// Repair a stem left behind by removing `-ed` or `-ing`
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    if stem.ends_with("bl") || stem.ends_with("iz") || (stem.ends_with("at") && ends_cvc(&chars)) {
        return format!("{}e", stem);
    }
    if ends_double_consonant(&chars) && !matches!(chars[chars.len() - 1], 'l' | 's' | 'z') {
        return chars[..chars.len() - 1].iter().collect();
    }
    if measure(&chars) == 1 && ends_cvc(&chars) {
        return format!("{}e", stem);
    }
    stem.to_string()
}

fn strip_verb_suffix(word: &str, suffix: &str) -> Option<String> {
    let stem = word.strip_suffix(suffix)?;
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 && has_vowel(&chars) {
        Some(restore_stem(stem))
    } else {
        None
    }
}

/// Reduce a word to its base form ("running" → "run", "studies" → "study").
pub fn lemmatize(word: &str) -> String {
    let word = word.to_lowercase();

    if let Some((_, base)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return base.to_string();
    }
    if word.len() <= 3 || !word.is_ascii() {
        return word;
    }

    for suffix in ["ies", "ied"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 2 {
                return format!("{}y", stem);
            }
        }
    }

    if let Some(stem) = word.strip_suffix("eed") {
        let chars: Vec<char> = stem.chars().collect();
        return if measure(&chars) > 0 {
            format!("{}ee", stem)
        } else {
            word
        };
    }

    if let Some(base) = strip_verb_suffix(&word, "ing") {
        return base;
    }
    if let Some(base) = strip_verb_suffix(&word, "ed") {
        return base;
    }

    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{}ss", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["sh", "ch", "ss", "x", "z"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }
    if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 1].to_string();
    }

    word
}
