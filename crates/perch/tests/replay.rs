//! Config file + feed file → pane list → scripted commands.

use std::path::Path;

use perch::{Command, Feed, PerchConfig, build_list, render};
use perch_timeline::{ActiveList, TimelineError};
use pretty_assertions::assert_eq;

const CONFIG: &str = r##"(
    timelines: [
        (name: "Home", source: Home),
        (name: "Mentions", source: Mentions),
        (name: "#rust", source: Search, args: Single("#rust")),
    ],
    visible: 1,
)"##;

const FEED: &str = r##"{
    "home": [
        {"id": 1, "created_at": 1000, "user": "alice", "text": "learning #rust"},
        {"id": 2, "created_at": 3000, "user": "bob", "text": "coffee"},
        {"id": 2, "created_at": 3000, "user": "bob", "text": "coffee"}
    ],
    "mentions": [
        {"id": 3, "created_at": 2000, "user": "carol", "text": "@you #Rust meetup?"}
    ]
}"##;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn replay_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = PerchConfig::load(&write(dir.path(), "perch.ron", CONFIG)).unwrap();
    let feed = Feed::load(&write(dir.path(), "feed.json", FEED)).unwrap();

    let mut list = build_list(&config, feed);
    assert_eq!(list.update_all().unwrap(), 5);

    let home = list.get_active_timeline().unwrap();
    assert_eq!(home.len(), 2);
    // First status fetched stays active after sorting: alice, below bob.
    assert_eq!(home.get_active().map(|s| s.user.as_str()), Some("alice"));
    assert_eq!(home.active_index(), Some(1));

    let script: Vec<Command> = ["last", "expand-previous", "status-next", "update"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    for command in script {
        command.apply(&mut list).unwrap();
    }

    assert_eq!(list.visible(), [1, 2]);
    assert_eq!(list.get_active_timeline_name().unwrap(), "#rust");

    let search = list.get_active_timeline().unwrap();
    // Newest first: carol (2000), then alice (1000). Alice was fetched first
    // (home sorts before mentions) so the cursor starts and stays on her.
    assert_eq!(search.len(), 2);
    assert_eq!(search.get_active().map(|s| s.user.as_str()), Some("alice"));

    assert_eq!(
        render(&list),
        "Home [Mentions] [#rust*]\n  Mentions  @carol: @you #Rust meetup? (1/1)\n  #rust     @alice: learning #rust (2/2)\n"
    );
}

#[test]
fn closing_every_pane() {
    let config = PerchConfig::from_ron(CONFIG).unwrap();
    let mut list = build_list(&config, Feed::from_json(FEED).unwrap());

    for _ in 0..3 {
        Command::Delete.apply(&mut list).unwrap();
    }
    assert!(!list.has_timelines());
    assert!(list.visible().is_empty());
    assert!(matches!(Command::Delete.apply(&mut list), Err(TimelineError::EmptyCollection)));
    assert_eq!(render(&list), "(no timelines)\n");
}
