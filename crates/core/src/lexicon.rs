//! Built-in word lists: stopwords and sentiment lexicons.
//!
//! Lists cover Spanish and English, the two languages the encyclopedia
//! frontends serve. Every entry is stored folded (lowercase, no diacritics),
//! so lookups are case- and accent-insensitive.

use std::collections::HashSet;

use crate::text::fold;

const STOPWORDS_ES: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "aqui", "asi", "aun", "bajo", "bien", "cada", "casi",
    "como", "con", "contra", "cual", "cuales", "cuando", "de", "del", "desde", "donde", "dos", "durante", "e", "el",
    "ella", "ellas", "ellos", "en", "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estaba",
    "estado", "estan", "estar", "este", "esto", "estos", "fue", "fueron", "ha", "habia", "han", "hasta", "hay", "la",
    "las", "le", "les", "lo", "los", "mas", "me", "mi", "mientras", "muy", "nada", "ni", "no", "nos", "o", "otra",
    "otras", "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "quien", "se", "sea", "segun", "ser",
    "si", "sido", "sin", "sobre", "solo", "son", "su", "sus", "tambien", "tan", "tanto", "te", "tiene", "tienen",
    "todo", "todos", "tras", "tu", "un", "una", "unas", "uno", "unos", "y", "ya", "yo",
];

const STOPWORDS_EN: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

const POSITIVE: &[&str] = &[
    // es
    "alegre", "alegria", "amor", "beneficio", "bueno", "buena", "celebrar", "exito", "exitoso", "excelente",
    "favorable", "feliz", "felicidad", "ganar", "gloria", "grande", "importante", "innovador", "logro", "mejor",
    "mejora", "paz", "popular", "positivo", "premio", "progreso", "prosperidad", "triunfo", "victoria",
    // en
    "achievement", "award", "beautiful", "best", "better", "brilliant", "celebrated", "excellent", "famous",
    "good", "great", "happy", "honor", "influential", "innovative", "love", "peace", "popular", "positive",
    "progress", "prosperity", "success", "successful", "victory", "win", "won",
];

const NEGATIVE: &[&str] = &[
    // es
    "ataque", "catastrofe", "conflicto", "crisis", "crimen", "derrota", "desastre", "destruccion", "dolor",
    "enfermedad", "error", "fracaso", "guerra", "malo", "mala", "miedo", "muerte", "negativo", "odio", "peligro",
    "perdida", "pobreza", "problema", "triste", "tristeza", "violencia",
    // en
    "attack", "bad", "conflict", "controversy", "crime", "crisis", "death", "defeat", "disaster", "disease",
    "failure", "fear", "hate", "killed", "loss", "negative", "pain", "poor", "poverty", "problem", "sad",
    "scandal", "terrible", "violence", "war",
];

/// A set of folded words with accent- and case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut set = Self::new();
        set.extend(words);
        set
    }

    /// Adds a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(fold(word.trim()))
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&fold(word))
    }

    /// Lookup for a word that is already folded.
    pub fn contains_folded(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stopwords plus positive and negative sentiment words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub stopwords: WordSet,
    pub positive: WordSet,
    pub negative: WordSet,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Lists bundled with the crate.
    pub fn builtin() -> Self {
        let mut stopwords = WordSet::from_words(STOPWORDS_ES.iter().copied());
        stopwords.extend(STOPWORDS_EN.iter().copied());

        Self {
            stopwords,
            positive: WordSet::from_words(POSITIVE.iter().copied()),
            negative: WordSet::from_words(NEGATIVE.iter().copied()),
        }
    }

    /// Lexicon with no entries at all.
    pub fn empty() -> Self {
        Self { stopwords: WordSet::new(), positive: WordSet::new(), negative: WordSet::new() }
    }
}
