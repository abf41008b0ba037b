use std::time::Duration;

use console_life::{
    draw::{ App, Phase, EXTINCT_MESSAGE },
    input::Prompter,
    proc::{ Coord, Field, ALIVE },
};

fn session(input: &str) -> Field {
    let mut p = Prompter::new(input.as_bytes(), Vec::new());
    let size = p.read_size().unwrap();
    let n = p.read_count().unwrap();
    let coords = p.read_coords(n, size).unwrap();
    Field::seeded(size, &coords).unwrap()
}

#[test]
fn glider_walks_into_a_block_and_stays() {
    // glider heading for the bottom-right corner of a 6x6 board
    let field = session("6\n5\n0\n1\n1\n2\n2\n0\n2\n1\n2\n2\n");
    assert_eq!(field.population(), 5);

    let mut app = App::new(field)
        .with_delay(Duration::ZERO)
        .with_maxgen(Some(40));
    let mut out = Vec::new();
    let phase = app.run(&mut out).unwrap();

    // a glider hitting a non-wrapping corner settles into a block
    assert_eq!(phase, Phase::Halted);
    assert_eq!(app.field().population(), 4);
    for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
        assert!(app.field().cell(Coord::new(r, c)).is_alive());
    }
    assert_eq!(app.field().step(), *app.field());
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Epoch: 40\n"));
}

#[test]
fn diagonal_pair_dies_out() {
    let field = session("4\n2\n0\n0\n1\n1\n");
    let mut app = App::new(field).with_delay(Duration::ZERO);
    let mut out = Vec::new();
    assert_eq!(app.run(&mut out).unwrap(), Phase::Extinct);
    assert_eq!(app.epoch(), 1);

    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with(&format!("{EXTINCT_MESSAGE}\n")));
    let last_board: String = out.lines().skip(5).take(4).collect();
    assert!(!last_board.contains(ALIVE));
}

#[test]
fn bad_coordinate_never_reaches_the_board() {
    let mut p = Prompter::new("3\n1\n0\n3\n".as_bytes(), Vec::new());
    let size = p.read_size().unwrap();
    let n = p.read_count().unwrap();
    assert!(p.read_coords(n, size).is_err());
}
