use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub cover: String,
    #[serde(rename = "hasLyrics", default)]
    pub has_lyrics: bool,
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LyricLine {
    /// Seconds from the start of the song.
    pub time: f64,
    #[serde(flatten)]
    pub text: LyricText,
}

/// Bilingual must come first so untagged deserialization prefers it when
/// both fields are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LyricText {
    Bilingual { original: String, translation: String },
    Plain { text: String },
}

impl LyricText {
    pub fn primary(&self) -> &str {
        match self {
            LyricText::Bilingual { original, .. } => original,
            LyricText::Plain { text } => text,
        }
    }

    pub fn translation(&self) -> Option<&str> {
        match self {
            LyricText::Bilingual { translation, .. } => Some(translation),
            LyricText::Plain { .. } => None,
        }
    }
}

impl Song {
    /// Index of the last lyric line whose timestamp has passed, if any.
    pub fn lyric_index_at(&self, position: Duration) -> Option<usize> {
        let secs = position.as_secs_f64();
        let mut active = None;
        for (i, line) in self.lyrics.iter().enumerate() {
            if line.time <= secs {
                active = Some(i);
            } else {
                break;
            }
        }
        active
    }

    pub fn lyric_seek_target(&self, index: usize) -> Option<Duration> {
        self.lyrics
            .get(index)
            .map(|line| Duration::from_secs_f64(line.time.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with_lyrics() -> Song {
        serde_json::from_str(
            r#"{
                "name": "Test",
                "artist": "Nobody",
                "hasLyrics": true,
                "lyrics": [
                    {"time": 0.0, "text": "intro"},
                    {"time": 12.5, "original": "原文", "translation": "translated"},
                    {"time": 30.0, "text": "outro"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_both_lyric_shapes() {
        let song = song_with_lyrics();
        assert_eq!(song.lyrics.len(), 3);
        assert_eq!(song.lyrics[0].text.primary(), "intro");
        assert_eq!(song.lyrics[1].text.primary(), "原文");
        assert_eq!(song.lyrics[1].text.translation(), Some("translated"));
        assert_eq!(song.lyrics[2].text.translation(), None);
    }

    #[test]
    fn lyric_index_tracks_position() {
        let song = song_with_lyrics();
        assert_eq!(song.lyric_index_at(Duration::ZERO), Some(0));
        assert_eq!(song.lyric_index_at(Duration::from_secs(12)), Some(0));
        assert_eq!(song.lyric_index_at(Duration::from_secs_f64(12.5)), Some(1));
        assert_eq!(song.lyric_index_at(Duration::from_secs(45)), Some(2));
    }

    #[test]
    fn no_lyrics_means_no_index() {
        let song: Song =
            serde_json::from_str(r#"{"name": "Silent", "artist": "Nobody"}"#).unwrap();
        assert!(!song.has_lyrics);
        assert_eq!(song.lyric_index_at(Duration::from_secs(10)), None);
    }

    #[test]
    fn seek_target_matches_line_time() {
        let song = song_with_lyrics();
        assert_eq!(
            song.lyric_seek_target(1),
            Some(Duration::from_secs_f64(12.5))
        );
        assert_eq!(song.lyric_seek_target(99), None);
    }
}
