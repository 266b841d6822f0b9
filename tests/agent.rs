use expendibots::core::{Board, Move, Pos, Side};
use expendibots::engine::{Agent, AgentOptions, Variant};

fn options(variant: Variant, depth: Option<u32>) -> AgentOptions {
    AgentOptions {
        variant,
        depth,
        seed: Some(11),
    }
}

/// Play until someone runs out of tokens or `max_turns` moves have been made
fn play(mut white: Agent, mut black: Agent, max_turns: usize) -> Board {
    for turn in 0..max_turns {
        let side = if turn % 2 == 0 { Side::White } else { Side::Black };
        let mover = if side == Side::White { &mut white } else { &mut black };

        let Some(mv) = mover.choose_move() else {
            break;
        };
        assert!(mover.board().legal_moves(side).contains(&mv));

        white.observe(side, &mv).unwrap();
        black.observe(side, &mv).unwrap();

        assert_eq!(white.board(), black.board());
        assert!(white.board().counts_consistent());
        if white.board().is_over() {
            break;
        }
    }
    white.board().clone()
}

#[test]
fn test_search_against_random() {
    let white = Agent::new(Side::White, options(Variant::CatapultDistance, Some(2)));
    let black = Agent::new(Side::Black, options(Variant::Random, None));

    let board = play(white, black, 60);
    assert!(board.count(Side::White) + board.count(Side::Black) <= 24);
}

#[test]
fn test_greedy_against_alphabeta() {
    let white = Agent::new(Side::White, options(Variant::Greedy, None));
    let black = Agent::new(Side::Black, options(Variant::AlphaBetaDistance, Some(2)));

    play(white, black, 40);
}

#[test]
fn test_timed_agents() {
    let white = Agent::new(Side::White, options(Variant::Timed, None));
    let black = Agent::new(Side::Black, options(Variant::TimedDistance, None));

    play(white, black, 6);
}

#[test]
fn test_observed_opening() {
    let mut agent = Agent::new(Side::Black, AgentOptions::default());
    agent
        .observe(Side::White, &"MOVE 1 3,1 3,3".parse::<Move>().unwrap())
        .unwrap();

    let board = agent.board().clone();
    assert_eq!(board.get(Pos::new(3, 3)).map(|stack| stack.side), Some(Side::White));
    assert!(!board.is_occupied(Pos::new(3, 1)));

    let reply = agent.choose_move().unwrap();
    assert!(board.legal_moves(Side::Black).contains(&reply));
    // choosing never touches the held board
    assert_eq!(agent.board().count(Side::White), 12);
}

#[test]
fn test_moves_over_json() {
    let explode = Move::explode(Pos::new(3, 4));
    let relocate = Move::relocate(2, Pos::new(0, 1), Pos::new(0, 3));

    assert_eq!(serde_json::to_string(&explode).unwrap(), r#"["EXPLODE",[3,4]]"#);
    assert_eq!(serde_json::to_string(&relocate).unwrap(), r#"["MOVE",2,[0,1],[0,3]]"#);

    let parsed: Move = serde_json::from_str(r#"["MOVE",2,[0,1],[0,3]]"#).unwrap();
    assert_eq!(parsed, relocate);
    let parsed: Move = serde_json::from_str(r#"["EXPLODE",[3,4]]"#).unwrap();
    assert_eq!(parsed, explode);

    assert!(serde_json::from_str::<Move>(r#"["BOOM",[3,4],[3,4]]"#).is_err());
    assert!(serde_json::from_str::<Move>(r#"["MOVE",[3,4]]"#).is_err());
}
