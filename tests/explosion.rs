use indoc::indoc;
use std::collections::BTreeSet;

use expendibots::core::{Board, Move, Pos, Side};

fn ladder() -> Board {
    indoc! {"
        . . . . . . . b1
        . . . . . . b2 .
        . . . . . w1 . .
        . . . . b1 . . .
        . . . w3 . . . .
        . . . . . . . .
        . w2 . . . . . .
        w1 . . . . . b4
    "}
    .parse()
    .unwrap()
}

fn positions(cells: &[(i32, i32)]) -> BTreeSet<Pos> {
    cells.iter().map(|&cell| Pos::from(cell)).collect()
}

#[test]
fn test_diagonal_chain_goes_off_together() {
    let mut board = ladder();
    let before = *board.counts();

    board.apply(&Move::explode(Pos::new(7, 7)));

    // the ladder stops at the empty cell below (3,3)
    assert_eq!(board.count(Side::White), before[Side::White] - 4);
    assert_eq!(board.count(Side::Black), before[Side::Black] - 4);
    let left: BTreeSet<Pos> = board.stacks().map(|(pos, _)| pos).collect();
    assert_eq!(left, positions(&[(1, 1), (0, 0), (7, 0)]));
    assert!(board.counts_consistent());
}

#[test]
fn test_blast_radius_is_the_connected_group() {
    let board = ladder();
    let group = positions(&[(7, 7), (6, 6), (5, 5), (4, 4), (3, 3)]);

    for &pos in &group {
        let blast: BTreeSet<Pos> = board.blast_radius(pos).into_iter().collect();
        assert_eq!(blast, group);
    }
    let corner: BTreeSet<Pos> = board.blast_radius(Pos::new(0, 0)).into_iter().collect();
    assert_eq!(corner, positions(&[(0, 0), (1, 1)]));
    assert!(board.blast_radius(Pos::new(2, 2)).is_empty());
}

#[test]
fn test_own_goal_ends_the_game() {
    let mut board = ladder();
    board.apply(&Move::explode(Pos::new(7, 0)));
    assert!(!board.is_over());

    board.apply(&Move::explode(Pos::new(4, 4)));
    assert_eq!(board.count(Side::Black), 0);
    assert!(board.is_over());
    assert!(board.legal_moves(Side::Black).is_empty());
}

#[test]
fn test_explosion_then_relocation_keeps_counters() {
    let mut board = Board::initial();
    let moves = [
        "MOVE 1 3,1 3,5",
        "EXPLODE 3,6",
        "MOVE 1 0,1 0,2",
        "EXPLODE 0,2",
    ];
    for mv in moves {
        board.apply(&mv.parse::<Move>().unwrap());
        assert!(board.counts_consistent());
    }

    // the white token on (3,5) took four black tokens with it
    assert_eq!(board.count(Side::Black), 8);
    assert_eq!(board.count(Side::White), 7);
}
