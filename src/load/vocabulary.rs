//! Translation of dictionary vocabulary codes into normalized labels

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The vocabulary a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PartOfSpeech,
    VocabularyLevel,
    SemanticCategory,
    ExampleType,
    RelationType,
    Language,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::PartOfSpeech => "part of speech",
            Category::VocabularyLevel => "vocabulary level",
            Category::SemanticCategory => "semantic category",
            Category::ExampleType => "example type",
            Category::RelationType => "relation type",
            Category::Language => "language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code missing from its translation table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {category} code {code:?}")]
pub struct UnknownCode {
    pub category: Category,
    pub code: String,
}

/// Lookup of normalized labels for vocabulary codes
pub trait Vocabulary {
    fn lookup(&self, category: Category, code: &str) -> Result<&str, UnknownCode>;
}

type Table = HashMap<&'static str, &'static str>;

static PARTS_OF_SPEECH: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("명사", "noun"),
        ("대명사", "pronoun"),
        ("수사", "numeral"),
        ("조사", "particle"),
        ("동사", "verb"),
        ("형용사", "adjective"),
        ("관형사", "determiner"),
        ("부사", "adverb"),
        ("감탄사", "interjection"),
        ("접사", "affix"),
        ("의존 명사", "bound noun"),
        ("보조 동사", "auxiliary verb"),
        ("보조 형용사", "auxiliary adjective"),
        ("어미", "ending"),
        ("품사 없음", "none"),
    ])
});

static VOCABULARY_LEVELS: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("초급", "beginner"),
        ("중급", "intermediate"),
        ("고급", "advanced"),
        ("없음", "none"),
    ])
});

static SEMANTIC_CATEGORIES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("인간", "human"),
        ("삶", "life"),
        ("식생활", "food"),
        ("의생활", "clothing"),
        ("주생활", "housing"),
        ("사회 생활", "social life"),
        ("경제 생활", "economic life"),
        ("교육", "education"),
        ("종교", "religion"),
        ("문화", "culture"),
        ("정치와 행정", "politics and administration"),
        ("자연", "nature"),
        ("동식물", "animals and plants"),
        ("개념", "concepts"),
    ])
});

static EXAMPLE_TYPES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("구", "phrase"),
        ("문장", "sentence"),
        ("대화", "dialogue"),
    ])
});

static RELATION_TYPES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("비슷한말", "synonym"),
        ("반대말", "antonym"),
        ("참고어", "reference"),
        ("높임말", "honorific"),
        ("낮춤말", "humble"),
        ("준말", "abbreviation"),
        ("본말", "full form"),
        ("큰말", "strong form"),
        ("작은말", "weak form"),
        ("센말", "intense form"),
        ("여린말", "mild form"),
    ])
});

static LANGUAGES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("영어", "English"),
        ("일본어", "Japanese"),
        ("프랑스어", "French"),
        ("스페인어", "Spanish"),
        ("아랍어", "Arabic"),
        ("몽골어", "Mongolian"),
        ("베트남어", "Vietnamese"),
        ("타이어", "Thai"),
        ("인도네시아어", "Indonesian"),
        ("러시아어", "Russian"),
        ("중국어", "Chinese"),
    ])
});

/// The built-in tables for the Korean learner's dictionary
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVocabulary;

impl StaticVocabulary {
    fn table(category: Category) -> &'static Table {
        match category {
            Category::PartOfSpeech => &PARTS_OF_SPEECH,
            Category::VocabularyLevel => &VOCABULARY_LEVELS,
            Category::SemanticCategory => &SEMANTIC_CATEGORIES,
            Category::ExampleType => &EXAMPLE_TYPES,
            Category::RelationType => &RELATION_TYPES,
            Category::Language => &LANGUAGES,
        }
    }
}

impl Vocabulary for StaticVocabulary {
    fn lookup(&self, category: Category, code: &str) -> Result<&str, UnknownCode> {
        Self::table(category)
            .get(code)
            .copied()
            .ok_or_else(|| UnknownCode {
                category,
                code: code.to_string(),
            })
    }
}
