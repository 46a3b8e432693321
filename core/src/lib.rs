pub mod rank;
pub mod recommend;
pub mod tokenizer;
pub mod vectorizer;
pub mod vocab;

pub use recommend::{corpus_vocabulary, recommend, Document, RecommendConfig, Recommendation};
pub use vectorizer::DocVector;
pub use vocab::{Vocabulary, PAD_ID, PAD_TOKEN, UNK_ID, UNK_TOKEN};
