use flotilla::{
    CellMark, Coordinate, Facing, GameError, HitOutcome, Match, Notice, Numbered, Phase, Player,
    PlayerId, TurnEvent, VesselClass, VesselId, STANDARD_FLEET,
};

fn c(col: u8, row: u8) -> Coordinate {
    Coordinate::new(col, row)
}

/// Player with the standard fleet laid out west to east on rows 4..=9.
fn fleet_player(id: PlayerId) -> Player {
    let mut player = Player::new(id, format!("P{}", id.number()), 10).unwrap();
    let ids = player.commission_all(&STANDARD_FLEET, &mut Numbered).unwrap();
    for (i, vessel) in ids.into_iter().enumerate() {
        player.deploy(vessel, c(0, 4 + i as u8), Facing::West).unwrap();
    }
    player
}

/// Player with a single frigate occupying (0,7)..(2,7).
fn lone_frigate(id: PlayerId) -> Player {
    let mut player = Player::new(id, "Picket", 10).unwrap();
    let ff = player.commission(VesselClass::Frigate, &mut Numbered).unwrap();
    player.deploy(ff, c(0, 7), Facing::West).unwrap();
    player
}

fn started(p1: Player, p2: Player) -> Match {
    let mut game = Match::new(p1, p2).unwrap();
    game.begin().unwrap();
    game
}

const FRIGATE: VesselId = VesselId::new(VesselClass::Frigate, 1);

#[test]
fn miss_into_open_water() {
    let mut game = started(fleet_player(PlayerId::One), fleet_player(PlayerId::Two));
    let order = game.add_order(c(0, 0)).unwrap();
    let report = game.resolve_turn().unwrap();

    assert_eq!(report.turn, 1);
    assert_eq!(report.attacker, PlayerId::One);
    assert_eq!(report.shots.len(), 1);
    assert_eq!(report.shots[0].order, order);
    assert_eq!(report.shots[0].outcome, HitOutcome::Miss);
    assert!(report.notices.is_empty());
    assert_eq!(report.winner, None);

    assert!(game.orders().is_empty());
    assert_eq!(game.active(), PlayerId::Two);
    assert_eq!(game.phase(), Phase::Planning);
    let mark = game.player(PlayerId::One).targeting().cell(c(0, 0)).unwrap().mark();
    assert_eq!(mark, CellMark::Miss);
    assert!(game.player(PlayerId::Two).personal().cell(c(0, 0)).unwrap().is_hit());
    assert!(game.log().is_empty());
}

#[test]
fn three_hits_sink_the_frigate() {
    let mut game = started(fleet_player(PlayerId::One), fleet_player(PlayerId::Two));
    for col in 0..3 {
        game.add_order(c(col, 7)).unwrap();
    }
    let report = game.resolve_turn().unwrap();

    let outcomes: Vec<HitOutcome> = report.shots.iter().map(|s| s.outcome).collect();
    assert_eq!(
        outcomes,
        [
            HitOutcome::Damaged(FRIGATE),
            HitOutcome::Damaged(FRIGATE),
            HitOutcome::Destroyed(FRIGATE)
        ]
    );
    assert_eq!(report.notices.len(), 6);
    assert_eq!(
        report.notices[0],
        Notice {
            to: PlayerId::Two,
            event: TurnEvent::AlliedDamaged { vessel: FRIGATE, at: c(0, 7) },
        }
    );
    assert_eq!(
        report.notices[1],
        Notice {
            to: PlayerId::One,
            event: TurnEvent::EnemyDamaged { at: c(0, 7) },
        }
    );
    assert_eq!(
        report.notices[5],
        Notice {
            to: PlayerId::One,
            event: TurnEvent::EnemySunk { vessel: FRIGATE },
        }
    );

    let defender = game.player(PlayerId::Two);
    assert_eq!(defender.battle_total(), 5);
    assert_eq!(defender.fleet().sunk_total(), 1);
    let targeting = game.player(PlayerId::One).targeting();
    for col in 0..3 {
        assert_eq!(targeting.cell(c(col, 7)).unwrap().mark(), CellMark::Destroyed);
        assert_eq!(
            defender.personal().cell(c(col, 7)).unwrap().mark(),
            CellMark::Destroyed
        );
    }

    assert_eq!(game.log().len(PlayerId::One), 3);
    assert_eq!(game.log().len(PlayerId::Two), 3);
    assert!(game.log().full(PlayerId::Two).iter().all(|e| e.turn == 1));
}

#[test]
fn sinking_the_last_vessel_wins() {
    let mut game = started(fleet_player(PlayerId::One), lone_frigate(PlayerId::Two));
    game.add_order(c(0, 7)).unwrap();
    game.resolve_turn().unwrap();
    // Player two has one deployed vessel, so one order per turn.
    game.add_order(c(9, 9)).unwrap();
    assert_eq!(game.add_order(c(8, 9)), Err(GameError::QueueFull));
    game.resolve_turn().unwrap();

    game.add_order(c(1, 7)).unwrap();
    game.add_order(c(2, 7)).unwrap();
    let report = game.resolve_turn().unwrap();
    assert_eq!(report.winner, Some(PlayerId::One));
    assert_eq!(game.phase(), Phase::Finished(PlayerId::One));
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert_eq!(game.check_winner(), Some(PlayerId::One));
}

#[test]
fn empty_fleet_loses_on_begin() {
    let empty = Player::new(PlayerId::Two, "Empty", 10).unwrap();
    let mut game = Match::new(fleet_player(PlayerId::One), empty).unwrap();
    assert_eq!(game.begin(), Ok(Phase::Finished(PlayerId::One)));

    let p1 = Player::new(PlayerId::One, "Empty", 10).unwrap();
    let p2 = Player::new(PlayerId::Two, "Empty", 10).unwrap();
    let game = Match::new(p1, p2).unwrap();
    assert_eq!(game.check_winner(), Some(PlayerId::Two));
}

#[test]
fn forfeit_ends_the_match_once() {
    let mut game = started(fleet_player(PlayerId::One), fleet_player(PlayerId::Two));
    game.add_order(c(5, 0)).unwrap();
    assert_eq!(game.forfeit(PlayerId::One), PlayerId::Two);
    assert_eq!(game.phase(), Phase::Finished(PlayerId::Two));
    assert!(game.player(PlayerId::One).has_forfeited());
    assert!(game.orders().is_empty());
    let mark = game.player(PlayerId::One).targeting().cell(c(5, 0)).unwrap().mark();
    assert_eq!(mark, CellMark::Empty);

    assert_eq!(game.forfeit(PlayerId::Two), PlayerId::Two);
    assert!(!game.player(PlayerId::Two).has_forfeited());
}

#[test]
fn forfeit_outranks_an_empty_fleet() {
    let empty = Player::new(PlayerId::One, "Empty", 10).unwrap();
    let mut game = Match::new(empty, fleet_player(PlayerId::Two)).unwrap();
    assert_eq!(game.forfeit(PlayerId::Two), PlayerId::One);
    assert_eq!(game.check_winner(), Some(PlayerId::One));
}

#[test]
fn turn_counts_full_rounds() {
    let mut game = started(fleet_player(PlayerId::One), fleet_player(PlayerId::Two));
    assert_eq!(game.turn(), 1);
    game.resolve_turn().unwrap();
    assert_eq!((game.turn(), game.active()), (1, PlayerId::Two));
    let report = game.resolve_turn().unwrap();
    assert_eq!(report.turn, 1);
    assert_eq!((game.turn(), game.active()), (2, PlayerId::One));
    game.resolve_turn().unwrap();
    game.resolve_turn().unwrap();
    assert_eq!(game.turn(), 3);
}

#[test]
fn reset_setup_restores_the_snapshot() {
    let mut game = Match::new(fleet_player(PlayerId::One), fleet_player(PlayerId::Two)).unwrap();
    let bb = VesselId::new(VesselClass::Battleship, 1);

    game.setup_mut(PlayerId::One).unwrap().undeploy(bb).unwrap();
    assert_eq!(game.player(PlayerId::One).battle_total(), 5);
    game.reset_setup(PlayerId::One).unwrap();
    assert_eq!(game.player(PlayerId::One), game.snapshot(PlayerId::One));
    assert_eq!(game.player(PlayerId::One).battle_total(), 6);

    game.setup_mut(PlayerId::One).unwrap().undeploy(bb).unwrap();
    game.confirm_setup(PlayerId::One).unwrap();
    game.setup_mut(PlayerId::One)
        .unwrap()
        .deploy(bb, c(9, 0), Facing::North)
        .unwrap();
    assert_eq!(game.snapshot(PlayerId::One).battle_total(), 5);
    game.reset_setup(PlayerId::One).unwrap();
    assert_eq!(game.player(PlayerId::One).battle_total(), 5);

    game.begin().unwrap();
    assert!(matches!(
        game.setup_mut(PlayerId::One),
        Err(GameError::WrongPhase(Phase::Planning))
    ));
    assert_eq!(
        game.reset_setup(PlayerId::Two),
        Err(GameError::WrongPhase(Phase::Planning))
    );
}

#[test]
fn activity_log_keeps_a_recent_window() {
    let mut game = started(fleet_player(PlayerId::One), fleet_player(PlayerId::Two));
    // Every hit on every hull, one shot per turn, until player two is sunk.
    let targets: Vec<Coordinate> = (0..6u8)
        .flat_map(|i| (0..STANDARD_FLEET[i as usize].capacity()).map(move |col| c(col, 4 + i)))
        .collect();
    for at in &targets {
        game.add_order(*at).unwrap();
        game.resolve_turn().unwrap();
        if game.winner().is_some() {
            break;
        }
        game.resolve_turn().unwrap();
    }
    assert_eq!(game.winner(), Some(PlayerId::One));
    let log = game.log();
    // 28 hull cells: 22 damage notices and 6 sink notices.
    assert_eq!(log.len(PlayerId::Two), 28);
    assert_eq!(log.recent(PlayerId::Two).len(), 28);
    assert_eq!(log.full(PlayerId::Two).last().map(|e| e.turn), Some(28));
    assert_eq!(log.len(PlayerId::One), 28);
}

#[test]
fn players_must_match_their_seats() {
    assert_eq!(
        Match::new(fleet_player(PlayerId::Two), fleet_player(PlayerId::One)).err(),
        Some(GameError::SeatMismatch(PlayerId::One))
    );
    assert_eq!(
        Match::new(fleet_player(PlayerId::One), fleet_player(PlayerId::One)).err(),
        Some(GameError::SeatMismatch(PlayerId::Two))
    );
}

#[test]
fn boards_must_share_a_size() {
    let small = Player::new(PlayerId::One, "Small", 5).unwrap();
    let large = Player::new(PlayerId::Two, "Large", 20).unwrap();
    assert_eq!(
        Match::new(small, large).err(),
        Some(GameError::BoardMismatch(5, 20))
    );
}
