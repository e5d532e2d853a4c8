use super::*;

fn delhi() -> Coordinate {
    Coordinate::new(28.6139, 77.209)
}

#[test]
fn no_command_before_first_send() {
    assert_eq!(MapCommands::default().since(0), None);
}

#[test]
fn send_bumps_seq_and_is_seen_once() {
    let mut commands = MapCommands::default();
    let recenter = MapCommand::RecenterOn { center: delhi(), zoom: Some(15) };
    commands.send(recenter);
    assert_eq!(commands.since(0), Some((1, recenter)));
    assert_eq!(commands.since(1), None);
}

#[test]
fn repeated_identical_command_is_delivered_again() {
    let mut commands = MapCommands::default();
    let recenter = MapCommand::RecenterOn { center: delhi(), zoom: None };
    commands.send(recenter);
    commands.send(recenter);
    assert_eq!(commands.since(1), Some((2, recenter)));
}

#[test]
fn only_latest_command_is_kept() {
    let mut commands = MapCommands::default();
    commands.send(MapCommand::RecenterOn { center: delhi(), zoom: None });
    let fit = MapCommand::FitBounds(Bounds::around(delhi()));
    commands.send(fit);
    assert_eq!(commands.since(0), Some((2, fit)));
}
