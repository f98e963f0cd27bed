use std::{collections::VecDeque, io};

use navalbattle::{
    board::{Coordinate, ShotOutcome},
    game::{
        BoardView, Console, CoordinatePrompt, Event, Match, MatchSummary, Phase, Rejection, Seat,
    },
    player::{Player, BASE_SCORE},
    ships::{FleetComposition, Orientation, Ship, ShipClass},
};
use rand::{rngs::StdRng, SeedableRng};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// One destroyer and one submarine per player.
fn small_fleet() -> FleetComposition {
    FleetComposition::new(vec![(ShipClass::Destroyer, 1), (ShipClass::Submarine, 1)])
}

/// A: destroyer (0,0)-(1,0), submarine (5,5). B: destroyer (0,0)-(0,1), submarine (9,9).
fn shooting_match() -> Match {
    let mut game = Match::new("A", "B", small_fleet());
    game.place_next(c(0, 0), Orientation::Horizontal).unwrap();
    game.place_next(c(5, 5), Orientation::Horizontal).unwrap();
    game.place_next(c(0, 0), Orientation::Vertical).unwrap();
    game.place_next(c(9, 9), Orientation::Vertical).unwrap();
    game
}

fn turn_flags(game: &Match) -> (bool, bool) {
    (
        game.player(Seat::First).is_turn(),
        game.player(Seat::Second).is_turn(),
    )
}

#[test]
fn test_setup_order() {
    let mut game = Match::new("A", "B", small_fleet());
    assert_eq!(game.phase(), Phase::Setup(Seat::First));
    assert_eq!(game.player(Seat::First).name(), "A");
    assert_eq!(game.player(Seat::Second).name(), "B");
    assert_eq!(game.next_ship(), Some(ShipClass::Destroyer));

    let placed = game.place_next(c(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(
        placed,
        Ship::new(ShipClass::Destroyer, c(0, 0), Orientation::Horizontal)
    );
    assert_eq!(game.next_ship(), Some(ShipClass::Submarine));

    // Rejected placement keeps the same ship pending.
    assert_eq!(
        game.place_next(c(2, 1), Orientation::Horizontal),
        Err(Rejection::AlreadyOccupied)
    );
    assert_eq!(
        game.place_next(c(-1, 4), Orientation::Horizontal),
        Err(Rejection::InvalidPosition)
    );
    assert_eq!(game.phase(), Phase::Setup(Seat::First));
    assert_eq!(game.next_ship(), Some(ShipClass::Submarine));
    assert_eq!(game.player(Seat::First).fleet_cells(), 2);

    game.place_next(c(5, 5), Orientation::Vertical).unwrap();
    assert_eq!(game.phase(), Phase::Setup(Seat::Second));
    assert_eq!(game.next_ship(), Some(ShipClass::Destroyer));
    assert_eq!(turn_flags(&game), (false, false));

    game.place_next(c(0, 0), Orientation::Vertical).unwrap();
    game.place_next(c(9, 9), Orientation::Vertical).unwrap();
    assert_eq!(game.phase(), Phase::Shooting(Seat::First));
    assert_eq!(game.active(), Some(Seat::First));
    assert_eq!(game.next_ship(), None);
    assert_eq!(turn_flags(&game), (true, false));
}

#[test]
fn test_wrong_phase() {
    let mut game = Match::new("A", "B", small_fleet());
    assert_eq!(game.fire(c(0, 0)), Err(Rejection::WrongPhase));

    let mut game = shooting_match();
    assert_eq!(
        game.place_next(c(4, 4), Orientation::Horizontal),
        Err(Rejection::WrongPhase)
    );
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(game.randomize_fleet(&mut rng), Err(Rejection::WrongPhase));
}

#[test]
fn test_full_match() {
    let mut game = shooting_match();

    let report = game.fire(c(9, 0)).unwrap();
    assert_eq!(report.shooter, Seat::First);
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.points, 0);
    assert!(report.turn_passed);
    assert_eq!(game.phase(), Phase::Shooting(Seat::Second));
    assert_eq!(turn_flags(&game), (false, true));

    let a_destroyer = Ship::new(ShipClass::Destroyer, c(0, 0), Orientation::Horizontal);
    let report = game.fire(c(0, 0)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit(a_destroyer));
    assert_eq!(report.points, BASE_SCORE);
    assert!(!report.turn_passed);
    assert_eq!(game.phase(), Phase::Shooting(Seat::Second));
    assert_eq!(game.player(Seat::First).hit_cells(), 1);

    assert!(game.fire(c(4, 4)).unwrap().turn_passed);
    assert_eq!(game.phase(), Phase::Shooting(Seat::First));
    assert_eq!(turn_flags(&game), (true, false));

    let b_destroyer = Ship::new(ShipClass::Destroyer, c(0, 0), Orientation::Vertical);
    assert_eq!(game.fire(c(0, 0)).unwrap().outcome, ShotOutcome::Hit(b_destroyer));
    assert_eq!(game.fire(c(0, 1)).unwrap().outcome, ShotOutcome::Sunk(b_destroyer));
    let last = game.fire(c(9, 9)).unwrap();
    assert_eq!(last.outcome, ShotOutcome::Defeated(Ship::submarine(c(9, 9))));
    assert!(!last.turn_passed);

    assert_eq!(game.phase(), Phase::Finished(Seat::First));
    assert_eq!(game.active(), None);
    assert_eq!(game.winner().map(Player::name), Some("A"));
    assert_eq!(
        game.summary(),
        Some(MatchSummary {
            winner: Seat::First,
            name: "A".to_string(),
            score: 3 * BASE_SCORE,
        })
    );
    assert_eq!(game.player(Seat::Second).score(), BASE_SCORE);
    assert!(game.player(Seat::Second).is_defeated());

    assert_eq!(game.fire(c(5, 5)), Err(Rejection::WrongPhase));
    assert!(!game.player(Seat::First).board().cell(c(5, 5)).unwrap().shot());
}

#[test]
fn test_score_after_misses() {
    let mut game = shooting_match();
    game.fire(c(9, 0)).unwrap();
    game.fire(c(4, 4)).unwrap();
    game.fire(c(9, 1)).unwrap();
    game.fire(c(4, 5)).unwrap();
    assert_eq!(game.player(Seat::First).wrong_attempts(), 2);

    let report = game.fire(c(0, 0)).unwrap();
    assert_eq!(report.points, BASE_SCORE / 2);
    assert_eq!(game.player(Seat::First).wrong_attempts(), 0);
    assert_eq!(game.fire(c(0, 1)).unwrap().points, BASE_SCORE);
}

#[test]
fn test_rejected_shot_keeps_turn() {
    let mut game = shooting_match();
    game.fire(c(3, 3)).unwrap();
    game.fire(c(6, 6)).unwrap();
    assert_eq!(game.phase(), Phase::Shooting(Seat::First));

    assert_eq!(game.fire(c(3, 3)), Err(Rejection::AlreadyShot));
    assert_eq!(game.fire(c(10, 3)), Err(Rejection::InvalidPosition));
    assert_eq!(game.phase(), Phase::Shooting(Seat::First));
    assert_eq!(turn_flags(&game), (true, false));
    assert_eq!(game.player(Seat::First).wrong_attempts(), 1);
    assert_eq!(game.player(Seat::First).score(), 0);
}

#[test]
fn test_randomize_fleet() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = Match::new("A", "B", FleetComposition::standard());
    game.randomize_fleet(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Setup(Seat::Second));
    assert_eq!(game.player(Seat::First).board().ships().len(), 10);
    assert_eq!(game.player(Seat::First).fleet_cells(), 20);

    game.place_next(c(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(game.randomize_fleet(&mut rng), Err(Rejection::WrongPhase));
    assert_eq!(game.player(Seat::Second).board().ships().len(), 1);
}

/// What a [`Script`] saw, without the borrows.
#[derive(Debug, Clone, PartialEq)]
enum Logged {
    SetupStarted(String),
    FleetComplete(String),
    RandomFleetRejected(String, Rejection),
    PlacementRejected(ShipClass, Rejection),
    TurnStarted(String),
    Target(String, String),
    ShotRejected(Coordinate, Rejection),
    Shot(String, ShotOutcome, u32),
    Finished(String, u32),
    Board(String, BoardView),
}

/// Console that plays back canned input and records everything it is told.
#[derive(Default)]
struct Script {
    coords: VecDeque<Coordinate>,
    orientations: VecDeque<Orientation>,
    random: VecDeque<bool>,
    continues: usize,
    log: Vec<Logged>,
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
}

impl Console for Script {
    fn request_coordinate(&mut self, prompt: CoordinatePrompt<'_>) -> io::Result<Coordinate> {
        if let CoordinatePrompt::Target { shooter, defender } = prompt {
            self.log.push(Logged::Target(
                shooter.name().to_owned(),
                defender.name().to_owned(),
            ));
        }
        self.coords.pop_front().ok_or_else(eof)
    }

    fn request_orientation(&mut self, class: ShipClass) -> io::Result<Orientation> {
        assert!(class.needs_orientation());
        self.orientations.pop_front().ok_or_else(eof)
    }

    fn request_continue(&mut self) -> io::Result<()> {
        self.continues += 1;
        Ok(())
    }

    fn offer_random_fleet(&mut self, _player: &Player) -> io::Result<bool> {
        Ok(self.random.pop_front().unwrap_or(false))
    }

    fn show_board(&mut self, owner: &Player, view: BoardView) -> io::Result<()> {
        self.log.push(Logged::Board(owner.name().to_owned(), view));
        Ok(())
    }

    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        self.log.push(match event {
            Event::SetupStarted { player } => Logged::SetupStarted(player.name().to_owned()),
            Event::FleetComplete { player } => Logged::FleetComplete(player.name().to_owned()),
            Event::RandomFleetRejected { player, reason } => {
                Logged::RandomFleetRejected(player.name().to_owned(), reason)
            }
            Event::PlacementRejected { class, reason } => Logged::PlacementRejected(class, reason),
            Event::TurnStarted { shooter } => Logged::TurnStarted(shooter.name().to_owned()),
            Event::ShotRejected { coord, reason } => Logged::ShotRejected(coord, reason),
            Event::ShotResolved {
                shooter, report, ..
            } => Logged::Shot(shooter.name().to_owned(), report.outcome, report.points),
            Event::Finished { winner } => {
                Logged::Finished(winner.name().to_owned(), winner.score())
            }
        });
        Ok(())
    }
}

#[test]
fn test_run_scripted_match() {
    let mut script = Script {
        coords: vec![
            // A's setup, with one rejected submarine.
            c(0, 0),
            c(1, 1),
            c(5, 5),
            // B's setup.
            c(0, 0),
            c(9, 9),
            // A misses.
            c(9, 0),
            // B hits, repeats a shot, then misses.
            c(0, 0),
            c(0, 0),
            c(4, 4),
            // A sinks everything.
            c(0, 0),
            c(0, 1),
            c(9, 9),
        ]
        .into(),
        orientations: vec![Orientation::Horizontal, Orientation::Vertical].into(),
        ..Script::default()
    };
    let mut game = Match::new("A", "B", small_fleet());
    let summary = game
        .run(&mut script, &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(
        summary,
        MatchSummary {
            winner: Seat::First,
            name: "A".to_string(),
            score: 3 * BASE_SCORE,
        }
    );
    assert!(script.coords.is_empty());
    assert!(script.orientations.is_empty());
    assert_eq!(game.phase(), Phase::Finished(Seat::First));

    let log = &script.log;
    assert!(log.contains(&Logged::PlacementRejected(
        ShipClass::Submarine,
        Rejection::AlreadyOccupied
    )));
    assert!(log.contains(&Logged::ShotRejected(c(0, 0), Rejection::AlreadyShot)));
    assert!(log.contains(&Logged::Board("A".to_string(), BoardView::Reveal)));
    assert!(log.contains(&Logged::Board("B".to_string(), BoardView::Hide)));
    assert_eq!(
        log.last(),
        Some(&Logged::Finished("A".to_string(), 3 * BASE_SCORE))
    );

    let setups: Vec<_> = log
        .iter()
        .filter_map(|entry| match entry {
            Logged::SetupStarted(name) | Logged::FleetComplete(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(setups, vec!["A", "A", "B", "B"]);

    let turns: Vec<_> = log
        .iter()
        .filter_map(|entry| match entry {
            Logged::TurnStarted(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(turns, vec!["A", "B", "A"]);

    let shots = log
        .iter()
        .filter(|entry| matches!(entry, Logged::Shot(..)))
        .count();
    assert_eq!(shots, 6);

    // Targets are always requested by the shooter against the other player.
    assert!(log.iter().all(|entry| match entry {
        Logged::Target(shooter, defender) => shooter != defender,
        _ => true,
    }));
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut script = Script {
        random: vec![true, true].into(),
        ..Script::default()
    };
    let mut game = Match::new("A", "B", FleetComposition::standard());
    let err = game
        .run(&mut script, &mut StdRng::seed_from_u64(11))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    // Both fleets were placed at random and the first shot was never taken.
    assert_eq!(game.phase(), Phase::Shooting(Seat::First));
    for &seat in &[Seat::First, Seat::Second] {
        assert_eq!(game.player(seat).fleet_cells(), 20);
        assert_eq!(game.player(seat).board().hit_cells(), 0);
    }
    assert_eq!(
        script.log.last(),
        Some(&Logged::Target("A".to_string(), "B".to_string()))
    );
}

#[test]
fn test_extreme_placement_rejected() {
    let mut game = Match::new("A", "B", small_fleet());
    assert_eq!(
        game.place_next(c(i32::MIN, 3), Orientation::Horizontal),
        Err(Rejection::InvalidPosition)
    );
    assert_eq!(
        game.place_next(c(i32::MAX, 3), Orientation::Horizontal),
        Err(Rejection::InvalidPosition)
    );
    assert_eq!(game.phase(), Phase::Setup(Seat::First));
    assert_eq!(game.next_ship(), Some(ShipClass::Destroyer));
    assert_eq!(game.player(Seat::First).fleet_cells(), 0);
}

/// More submarines than a 10x10 board can hold apart from each other.
fn oversized_fleet() -> FleetComposition {
    FleetComposition::new(vec![(ShipClass::Submarine, 30)])
}

#[test]
fn test_randomize_fleet_that_does_not_fit() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Match::new("A", "B", oversized_fleet());
    assert_eq!(
        game.randomize_fleet(&mut rng),
        Err(Rejection::FleetDoesNotFit)
    );
    assert_eq!(game.phase(), Phase::Setup(Seat::First));
    assert!(game.player(Seat::First).board().ships().is_empty());

    // Placing by hand is still possible.
    game.place_next(c(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(game.player(Seat::First).fleet_cells(), 1);
}

#[test]
fn test_run_reports_failed_random_fleet() {
    let mut script = Script {
        random: vec![true].into(),
        ..Script::default()
    };
    let mut game = Match::new("A", "B", oversized_fleet());
    let err = game
        .run(&mut script, &mut StdRng::seed_from_u64(5))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    assert_eq!(
        script.log,
        vec![
            Logged::SetupStarted("A".to_string()),
            Logged::RandomFleetRejected("A".to_string(), Rejection::FleetDoesNotFit),
        ]
    );
    assert_eq!(game.phase(), Phase::Setup(Seat::First));
    assert!(game.player(Seat::First).board().ships().is_empty());
}
