//! Board behaviour driven by a hand-written Conway step.

use tessel_board::{Board, Lattice, Shape};
use tessel_core::{Cell, CellReader};
use tessel_space::Torus2D;

fn conway(space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
    for row in 0..space.height() {
        for col in 0..space.width() {
            let i = space.index(row, col);
            let n = space.count_matching(prev, row, col, &1);
            next[i] = Cell::from(matches!((prev[i], n), (1, 2) | (_, 3)));
        }
    }
}

fn snapshot(board: &Board) -> Vec<Cell> {
    board.current().to_vec()
}

#[test]
fn blinker_has_period_two() {
    let mut b = Board::new(5, 5).unwrap();
    b.inject(2, 1, &Shape::blinker());
    let start = snapshot(&b);
    b.advance_with(conway);
    assert_ne!(snapshot(&b), start);
    assert_eq!(b.cell(1, 2), 1);
    assert_eq!(b.cell(3, 2), 1);
    b.advance_with(conway);
    assert_eq!(snapshot(&b), start);
}

#[test]
fn glider_returns_home_on_small_torus() {
    // A glider moves one cell diagonally every 4 generations, so on an
    // 8x8 torus it is back where it started after 32.
    let mut b = Board::new(8, 8).unwrap();
    b.inject(0, 0, &Shape::glider());
    let start = snapshot(&b);
    for _ in 0..32 {
        b.advance_with(conway);
        assert_eq!(b.population(1), 5);
    }
    assert_eq!(snapshot(&b), start);
}

#[test]
fn advance_is_deterministic() {
    let mut a = Board::new(24, 24).unwrap();
    a.randomize(1234, 2);
    let mut b = a.clone();
    for _ in 0..50 {
        Lattice::advance_with(&mut a, conway);
        Lattice::advance_with(&mut b, conway);
    }
    assert_eq!(a.current(), b.current());
    assert_eq!(Lattice::generation(&a), Lattice::generation(&b));
}

#[test]
fn block_is_still_across_the_seam() {
    let mut b = Board::new(6, 6).unwrap();
    b.inject(5, 5, &Shape::block());
    let start = snapshot(&b);
    b.advance_with(conway);
    assert_eq!(snapshot(&b), start);
}
