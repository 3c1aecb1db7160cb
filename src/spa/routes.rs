use std::fmt;

/// Where a page's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Bundled with the binary, never fetched.
    Inline,
    /// Fetched from a path or URL on first visit.
    Remote(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Pie,
    Map,
    Relation,
    Music,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Pie,
        Route::Map,
        Route::Relation,
        Route::Music,
    ];

    /// Unknown fragments resolve to `Home` rather than erroring.
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.trim_start_matches('#') {
            "" | "home" => Route::Home,
            "pie" => Route::Pie,
            "map" => Route::Map,
            "relation" => Route::Relation,
            "music" => Route::Music,
            _ => Route::Home,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Pie => "pie",
            Route::Map => "map",
            Route::Relation => "relation",
            Route::Music => "music",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "About Me",
            Route::Pie => "Course Grades",
            Route::Map => "Campus Map",
            Route::Relation => "Relations",
            Route::Music => "Music",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Route::Home => 0,
            Route::Pie => 1,
            Route::Map => 2,
            Route::Relation => 3,
            Route::Music => 4,
        }
    }

    pub fn source(&self) -> PageSource {
        match self {
            Route::Home => PageSource::Inline,
            Route::Pie => PageSource::Remote("pages/pie.txt".into()),
            Route::Map => PageSource::Remote("pages/map.txt".into()),
            Route::Relation => PageSource::Remote("pages/relation.txt".into()),
            Route::Music => PageSource::Remote("pages/music.txt".into()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_resolve_to_routes() {
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#"), Route::Home);
        assert_eq!(Route::from_fragment("#home"), Route::Home);
        assert_eq!(Route::from_fragment("pie"), Route::Pie);
        assert_eq!(Route::from_fragment("#map"), Route::Map);
        assert_eq!(Route::from_fragment("relation"), Route::Relation);
        assert_eq!(Route::from_fragment("#music"), Route::Music);
    }

    #[test]
    fn unknown_fragment_falls_back_to_home() {
        assert_eq!(Route::from_fragment("#does-not-exist"), Route::Home);
        assert_eq!(Route::from_fragment("MUSIC"), Route::Home);
    }

    #[test]
    fn only_home_is_inline() {
        for route in Route::ALL {
            match route.source() {
                PageSource::Inline => assert_eq!(route, Route::Home),
                PageSource::Remote(path) => assert!(path.contains(route.key())),
            }
        }
    }
}
