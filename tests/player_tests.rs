use flotilla::{GameError, Lane, Numbered, Player, PlayerId, VesselClass};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn random_deployment_is_all_or_nothing() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut player = Player::new(PlayerId::One, "Crowded", 6).unwrap();
    // Seven battleships need 42 cells on a 36 cell board.
    player
        .commission_all(&[VesselClass::Battleship; 7], &mut Numbered)
        .unwrap();
    let before = player.clone();

    assert_eq!(player.deploy_randomly(&mut rng), Err(GameError::NoRoom));
    assert_eq!(player, before);
    assert_eq!(player.battle_total(), 0);
    assert_eq!(player.fleet().in_port_total(), 7);
    assert_eq!(player.personal().occupied_count(), 0);
}

#[test]
fn random_deployment_places_every_vessel() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut player = Player::new(PlayerId::Two, "Roomy", 12).unwrap();
    player
        .commission_all(&[VesselClass::Frigate, VesselClass::Carrier], &mut Numbered)
        .unwrap();
    player.deploy_randomly(&mut rng).unwrap();

    assert_eq!(player.battle_total(), 2);
    assert_eq!(player.fleet().vessels(Lane::InPort).count(), 0);
    assert_eq!(player.personal().occupied_count(), 9);
    assert!(player.fleet().vessels(Lane::Deployed).all(|v| v.placement().is_some()));
}
