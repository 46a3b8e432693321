use anyhow::{ensure, Result};
use std::collections::HashMap;

pub const PAD_TOKEN: &str = "<PAD>";
pub const UNK_TOKEN: &str = "<UNK>";
pub const PAD_ID: u32 = 0;
pub const UNK_ID: u32 = 1;

/// Bounded token/id mapping ranked by global frequency. Ids 0 and 1 are
/// reserved for the padding and unknown-token markers; real tokens start
/// at id 2 in descending-frequency order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
    id_to_token: Vec<String>,
    // global frequency per id; 0 for the two reserved slots
    counts: Vec<u64>,
}

impl Vocabulary {
    /// Build from every document's token sequence. Tokens are ranked by total
    /// frequency across the flattened sequences, ties broken by first
    /// appearance so the result never depends on hash iteration order. At
    /// most `max_size - 2` tokens are kept alongside the two reserved ids.
    pub fn build<S: AsRef<str>>(sequences: &[Vec<S>], max_size: usize) -> Result<Self> {
        ensure!(
            max_size >= 2,
            "vocabulary size must be at least 2 to reserve {PAD_TOKEN} and {UNK_TOKEN}, got {max_size}"
        );

        let mut stats: HashMap<&str, (u64, usize)> = HashMap::new();
        let mut position = 0usize;
        for sequence in sequences {
            for token in sequence {
                let entry = stats.entry(token.as_ref()).or_insert((0, position));
                entry.0 += 1;
                position += 1;
            }
        }

        let mut ranked: Vec<(&str, u64, usize)> = stats
            .into_iter()
            .map(|(token, (count, first_seen))| (token, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(max_size - 2);

        let mut id_to_token = Vec::with_capacity(ranked.len() + 2);
        let mut counts = Vec::with_capacity(ranked.len() + 2);
        id_to_token.push(PAD_TOKEN.to_string());
        id_to_token.push(UNK_TOKEN.to_string());
        counts.push(0);
        counts.push(0);
        for (token, count, _) in &ranked {
            id_to_token.push((*token).to_string());
            counts.push(*count);
        }

        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id as u32))
            .collect();

        Ok(Self { token_to_id, id_to_token, counts })
    }

    /// Map tokens to ids, substituting `UNK_ID` for anything out of vocabulary.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens
            .iter()
            .map(|t| self.token_to_id.get(t.as_ref()).copied().unwrap_or(UNK_ID))
            .collect()
    }

    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    pub fn token_of(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// Total entries including the two reserved ids.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        // the reserved ids are always present
        false
    }

    /// Real tokens with their global frequency, most frequent first.
    pub fn ranked_terms(&self) -> impl Iterator<Item = (&str, u64)> {
        self.id_to_token
            .iter()
            .zip(self.counts.iter())
            .skip(2)
            .map(|(token, count)| (token.as_str(), *count))
    }
}
