//! Outcast detection: the noun least related to the rest of a list.

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::wordnet::WordNet;

/// Finds the outcast of a list of nouns over a borrowed [`WordNet`].
///
/// # Example
///
/// ```
/// use wordnet_graph::outcast::Outcast;
/// use wordnet_graph::wordnet::WordNet;
///
/// let synsets = "0,entity,x\n1,animal,x\n2,dog,x\n3,cat,x\n4,rock,x\n";
/// let hypernyms = "1,0\n2,1\n3,1\n4,0\n";
/// let wordnet = WordNet::parse(synsets, hypernyms).unwrap();
///
/// let outcast = Outcast::new(&wordnet);
/// assert_eq!(outcast.outcast(&["dog", "cat", "rock"]).unwrap(), Some("rock"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// For each noun, the sum of its distances to every noun in the list.
    ///
    /// # Errors
    /// * `GraphError::MissingInput` - `nouns` is empty
    /// * `GraphError::UnknownNoun` - a word is not a noun; checked before
    ///   any distance is computed
    /// * `GraphError::PathNotFound` - two nouns share no ancestor
    pub fn distance_totals<S: AsRef<str>>(&self, nouns: &[S]) -> GraphResult<Vec<u64>> {
        if nouns.is_empty() {
            return Err(GraphError::MissingInput("noun list is empty".into()));
        }
        if let Some(unknown) = nouns.iter().find(|n| !self.wordnet.is_noun(n.as_ref())) {
            return Err(GraphError::UnknownNoun(unknown.as_ref().to_string()));
        }

        let mut totals = vec![0u64; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let (a, b) = (nouns[i].as_ref(), nouns[j].as_ref());
                let d = self
                    .wordnet
                    .distance(a, b)?
                    .ok_or_else(|| GraphError::PathNotFound(a.to_string(), b.to_string()))?;
                totals[i] += u64::from(d);
                totals[j] += u64::from(d);
            }
        }
        Ok(totals)
    }

    /// The noun with the strictly largest distance total.
    ///
    /// Ties go to the earliest noun. Returns `None` when every total is
    /// zero, e.g. a single noun or a list of synonyms.
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> GraphResult<Option<&'n str>> {
        let totals = self.distance_totals(nouns)?;

        let mut max = 0u64;
        let mut winner: Option<&'n str> = None;
        for (noun, &total) in nouns.iter().zip(&totals) {
            if total > max {
                max = total;
                winner = Some(noun.as_ref());
            }
        }

        debug!("outcast of {} nouns: {:?} (total={})", nouns.len(), winner, max);
        Ok(winner)
    }
}
