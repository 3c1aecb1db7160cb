use std::{collections::HashMap, sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::library::song::Song;

/// The playlist. Loaded once at startup and immutable afterwards.
pub struct SongLibrary {
    songs: Vec<Song>,
    by_name: HashMap<String, usize>,
}

impl SongLibrary {
    pub fn default_sources() -> Vec<String> {
        vec![
            "data/music-info.json".to_string(),
            "../data/music-info.json".to_string(),
            "./src/data/music-info.json".to_string(),
        ]
    }

    /// Tries every source twice before settling on the builtin list, so a
    /// slow filesystem mount gets a second chance.
    pub async fn load(sources: &[String]) -> Arc<Self> {
        for round in 0..2 {
            for source in sources {
                match Self::load_from(source).await {
                    Ok(library) => {
                        info!("loaded {} songs from {source}", library.len());
                        return Arc::new(library);
                    }
                    Err(err) => warn!("could not load songs from {source}: {err}"),
                }
            }
            if round == 0 {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
        }

        warn!("falling back to the builtin song list");
        Arc::new(Self::builtin())
    }

    async fn load_from(source: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let raw = tokio::fs::read_to_string(source).await?;
        let songs: Vec<Song> = serde_json::from_str(&raw)?;
        if songs.is_empty() {
            return Err("song list is empty".into());
        }
        Ok(Self::from_songs(songs))
    }

    pub fn from_songs(songs: Vec<Song>) -> Self {
        let by_name = songs
            .iter()
            .enumerate()
            .map(|(i, song)| (song.name.clone(), i))
            .collect();
        Self { songs, by_name }
    }

    pub fn builtin() -> Self {
        let make = |name: &str, artist: &str, has_lyrics: bool| Song {
            name: name.to_string(),
            artist: artist.to_string(),
            path: format!("music/{name}.mp3"),
            cover: format!("music/{name}.jpg"),
            has_lyrics,
            lyrics: Vec::new(),
        };

        Self::from_songs(vec![
            make("不要让梦醒来", "泰然阿修罗", true),
            make("Lumina", "Wisp X / Xomu", false),
            make("胧月夜", "PIKASONIC", true),
            make("Dragonflame", "Kirara Magic", false),
            make("Running Up That Hill", "Kate Bush", true),
            make("Over the New World", "WOW sound", false),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Song> {
        self.by_name.get(name).map(|&i| &self.songs[i])
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
