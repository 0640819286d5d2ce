use lifegrid::Generation;
use lifegrid::Grid;
use lifegrid::Phase;
use lifegrid::State;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn parse(s: &str) -> Generation {
    s.parse().unwrap()
}

fn assert_same_states(actual: &Generation, expected: &Generation) {
    assert!(
        actual.states().eq(expected.states()),
        "expected\n{expected}\ngot\n{actual}"
    );
}

#[test]
fn dead_corner_with_three_neighbors_is_born() {
    let mut generation = parse(
        "
        010
        110
        000
        ",
    );

    let next = generation.compute_successor();

    assert_eq!(generation.cell(0, 0).unwrap().alive_neighbor_count, 3);
    assert_eq!(next.cell(0, 0).unwrap().state, State::Alive);

    // Everything else has two alive neighbors: the live ones survive, the dead ones stay dead
    assert_same_states(
        &next,
        &parse(
            "
            110
            110
            000
            ",
        ),
    );
}

#[test]
fn full_board_loses_edges_and_center() {
    let mut generation = parse(
        "
        111
        111
        111
        ",
    );

    let next = generation.compute_successor();

    assert_eq!(generation.cell(0, 0).unwrap().alive_neighbor_count, 3);
    assert_eq!(generation.cell(1, 0).unwrap().alive_neighbor_count, 5);
    assert_eq!(generation.cell(1, 1).unwrap().alive_neighbor_count, 8);

    assert_same_states(
        &next,
        &parse(
            "
            101
            000
            101
            ",
        ),
    );
}

#[test]
fn glider_moves_diagonally() {
    let mut grid = Grid::new(6, 6).unwrap();
    grid.seed(parse(
        "
        010000
        001000
        111000
        000000
        000000
        000000
        ",
    ))
    .unwrap();

    for _ in 0..4 {
        grid.step().unwrap();
    }

    let moved = grid.latest().unwrap();
    assert_eq!(moved.age(), 4);
    assert_same_states(
        moved,
        &parse(
            "
            000000
            001000
            000100
            011100
            000000
            000000
            ",
        ),
    );
}

#[test]
fn random_run_keeps_its_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(9, 9).unwrap();
    grid.init_random_with(&mut rng).unwrap();

    while grid.len() < 50 && !grid.phase().is_finished() {
        grid.step().unwrap();
    }

    for (age, generation) in grid.generations().iter().enumerate() {
        assert_eq!(generation.age(), age);
        assert_eq!(generation.dimensions(), (9, 9));
        assert_eq!(generation.cells().len(), 81);
    }

    let latest = grid.latest().unwrap();
    match grid.phase() {
        Phase::Extinct => assert!(latest.is_extinct()),
        Phase::Stepping => assert!(!latest.is_extinct()),
        phase => panic!("unexpected phase {phase:?}"),
    }
}

#[test]
fn independent_random_populations_differ() {
    let a = Generation::random(16, 16).unwrap();
    let b = Generation::random(16, 16).unwrap();

    assert!(!a.states().eq(b.states()));
}

#[test]
fn restart_gets_a_fresh_grid() {
    let mut first = Grid::new(3, 3).unwrap();
    first.seed(parse("000\n010\n000")).unwrap();
    first.step().unwrap();
    assert_eq!(first.phase(), Phase::Extinct);

    let mut second = Grid::new(3, 3).unwrap();
    second.init_random().unwrap();

    assert_eq!(second.len(), 1);
    assert_eq!(second.phase(), Phase::Seeded);
    assert_eq!(first.len(), 2);
}
