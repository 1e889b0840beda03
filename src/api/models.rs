use serde::{Deserialize, Serialize};

/// A playable entry. `url` is already resolved and never inspected; two tracks
/// are the same track when their URLs match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub url: String,
}

impl Track {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn same_as(&self, other: &Track) -> bool {
        self.url == other.url
    }
}

/// An object in the bucket, addressed by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObject {
    pub full_path: String,
}

impl StorageObject {
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
        }
    }

    /// Last path segment, which is what the listing shows as a title.
    pub fn name(&self) -> &str {
        last_segment(&self.full_path)
    }
}

/// One level of the storage hierarchy: child folders and the objects directly inside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub prefixes: Vec<String>,
    pub items: Vec<StorageObject>,
}

impl Listing {
    pub fn extend(&mut self, page: Listing) {
        self.prefixes.extend(page.prefixes);
        self.items.extend(page.items);
    }
}

pub fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// Joins a (possibly empty) root folder and a child name into a folder prefix
/// ending in `/`.
pub fn folder_prefix(root: &str, child: &str) -> String {
    let root = root.trim_matches('/');
    let child = child.trim_matches('/');
    match (root.is_empty(), child.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("{}/", child),
        (false, true) => format!("{}/", root),
        (false, false) => format!("{}/{}/", root, child),
    }
}

pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_name_is_final_segment() {
        let object = StorageObject::new("faithflow-music/Worship/Morning Light.mp3");
        assert_eq!(object.name(), "Morning Light.mp3");
        assert_eq!(last_segment("faithflow-music/Worship/"), "Worship");
        assert_eq!(last_segment("Hymns"), "Hymns");
    }

    #[test]
    fn folder_prefix_handles_empty_root() {
        assert_eq!(folder_prefix("", "Worship"), "Worship/");
        assert_eq!(folder_prefix("/faithflow-music/", "Worship"), "faithflow-music/Worship/");
        assert_eq!(folder_prefix("faithflow-music", ""), "faithflow-music/");
        assert_eq!(folder_prefix("", ""), "");
    }

    #[test]
    fn pages_concatenate_in_order() {
        let mut listing = Listing {
            prefixes: vec!["Hymns/".to_string()],
            items: vec![StorageObject::new("a.mp3")],
        };
        listing.extend(Listing {
            prefixes: vec!["Worship/".to_string()],
            items: vec![StorageObject::new("b.mp3"), StorageObject::new("c.mp3")],
        });

        assert_eq!(listing.prefixes, vec!["Hymns/", "Worship/"]);
        let names: Vec<&str> = listing.items.iter().map(StorageObject::name).collect();
        assert_eq!(names, vec!["a.mp3", "b.mp3", "c.mp3"]);
    }

    #[test]
    fn tracks_compare_by_url() {
        let a = Track::new("One", "https://cdn/a");
        let renamed = Track::new("Uno", "https://cdn/a");
        let b = Track::new("One", "https://cdn/b");
        assert!(a.same_as(&renamed));
        assert!(!a.same_as(&b));
    }

    #[test]
    fn durations_render_as_minutes_and_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(61.9), "1:01");
        assert_eq!(format_duration(f64::NAN), "0:00");
    }
}
