use derelict_client::{ClientConfig, Command, SessionBuilder};
use game_content::ContentFactory;
use game_core::Direction;

#[test]
fn bundled_data_starts_a_playable_session() {
    let defaults = ClientConfig::default();
    let content = ContentFactory::new(&defaults.data_dir);
    let config = content.load_config().unwrap();
    let layout = content.load_map(&defaults.map).unwrap();

    let mut session = SessionBuilder::new()
        .config(config)
        .layout(&layout)
        .build()
        .unwrap();
    let player = session.controlled().unwrap();
    assert_eq!(session.world().primary(), Some(player));

    let outcome = session.submit(Command::Bump(Direction::EAST)).unwrap();
    assert!(outcome.committed);
    assert_eq!(session.controlled(), Some(player));
}

#[test]
fn bundled_content_exists() {
    let defaults = ClientConfig::default();
    assert!(defaults.data_dir.join("config.toml").exists());
    assert!(
        defaults
            .data_dir
            .join("maps")
            .join(format!("{}.ron", defaults.map))
            .exists()
    );
}
