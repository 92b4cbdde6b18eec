//! Tangent continuity pass over interpolated tracks.
//!
//! Walks the keys once, left to right. For every key after the first, the
//! previous key's outgoing tangent is copied forward; if the previous key has
//! none yet, both keys receive 0. Since 0 is the only value ever introduced,
//! a fixed track carries tangent 0 on every key.

use crate::data::{Key, Track};

/// Fix one key sequence. Sequences shorter than two keys are returned as-is.
pub fn fix_keys(keys: &[Key]) -> Vec<Key> {
    let mut out: Vec<Key> = Vec::with_capacity(keys.len());
    if keys.len() < 2 {
        out.extend_from_slice(keys);
        return out;
    }

    for key in keys {
        let mut key = *key;
        if let Some(prev) = out.last_mut() {
            let carried = *prev.tangent_out.get_or_insert(0.0);
            key.tangent_out = Some(carried);
        }
        out.push(key);
    }
    out
}

/// Fix a track in place of its keys. Non-linear tracks pass through.
pub fn fix_track(track: Track) -> Track {
    match track {
        Track::Linear { keys } if keys.len() >= 2 => Track::Linear {
            keys: fix_keys(&keys),
        },
        other => other,
    }
}
