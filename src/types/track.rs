//! Normalized track records.

use serde::{Deserialize, Serialize};

/// A single play-history entry or recommendation candidate.
///
/// `artist_name` is the artist identity key for the analysis core: two
/// artists sharing a display name are indistinguishable downstream.
/// Popularity and genres are mandatory on every record; filling in absent
/// upstream values is the normalizer's job, never the consumer's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Display name of the track (not required to be unique)
    pub track_name: String,
    /// Display name of the credited artist
    pub artist_name: String,
    /// Artist popularity, 0-100, higher = more mainstream
    pub artist_popularity: u8,
    /// Genre labels in their original order (order affects match reporting)
    pub genres: Vec<String>,
}

impl TrackRecord {
    /// Check the record against the input contract.
    ///
    /// The type system already rejects missing fields and negative values;
    /// the remaining hole is a popularity above 100.
    pub fn validate(&self) -> Result<(), String> {
        if self.artist_popularity > 100 {
            return Err(format!(
                "artist_popularity {} is out of range 0-100",
                self.artist_popularity
            ));
        }
        Ok(())
    }
}
