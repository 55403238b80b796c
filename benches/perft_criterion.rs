use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nebula_chess::game_state::game_state::GameState;
use nebula_chess::move_generation::perft::perft;
use nebula_chess::utils::board_diagram::parse_board_diagram;
use nebula_chess::Color;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: Option<&'static str>,
    expected_nodes: &'static [u64],
}

const WORMHOLE_SKIRMISH: &str = "
    b..x..k...wh
    .....p......
    ............
    ..QW.....W..
    ............
    ......s.....
    ............
    ............
    ....L.......
    ............
    ......P.....
    B.....K.....
";

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "start",
    diagram: None,
    expected_nodes: &[32, 1024],
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        diagram: None,
        expected_nodes: &[32, 1024],
    },
    BenchCase {
        name: "wormhole_skirmish",
        diagram: Some(WORMHOLE_SKIRMISH),
        expected_nodes: &[],
    },
];

fn selected_suite() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("NEBULA_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn case_state(case: &BenchCase) -> GameState {
    match case.diagram {
        Some(diagram) => {
            let board = parse_board_diagram(diagram).expect("benchmark diagram should parse");
            GameState::from_board(board, Color::White)
        }
        None => GameState::new_game(),
    }
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = selected_suite();

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let game = case_state(case);
        // cases without recorded counts are timed at depth 2 only
        let depths: Vec<(u8, Option<u64>)> = if case.expected_nodes.is_empty() {
            vec![(2, None)]
        } else {
            case.expected_nodes
                .iter()
                .enumerate()
                .map(|(idx, nodes)| ((idx + 1) as u8, Some(*nodes)))
                .collect()
        };

        for (depth, expected) in depths {
            let warmup = perft(&game, depth);
            if let Some(expected) = expected {
                assert_eq!(
                    warmup.nodes as u64, expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }

            group.throughput(Throughput::Elements(warmup.nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, &depth| {
                    b.iter(|| black_box(perft(black_box(&game), black_box(depth)).nodes));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
