use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stack_mate::engines::computer_agent::ComputerAgent;
use stack_mate::game_state::board::Board;
use stack_mate::game_state::chess_types::{Color, Difficulty};
use stack_mate::move_generation::legal_move_generator::generate_legal_moves;
use stack_mate::moves::move_validator::is_legal;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static [(u8, u8)],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        moves: &[(52, 36)],
    },
    BenchCase {
        name: "open_center",
        moves: &[(52, 36), (12, 28), (62, 45), (1, 18), (61, 34), (6, 21), (51, 43)],
    },
];

fn case_board(case: &BenchCase) -> Board {
    case.moves
        .iter()
        .fold(Board::starting_position(), |board, &(from, to)| board.with_move(from, to))
}

fn bench_validation_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_all_pairs");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(64 * 64));

    for case in CASES {
        let board = case_board(case);
        let expected = generate_legal_moves(&board, Color::White).len();

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let mut legal = 0usize;
                for from in 0..64u32 {
                    for to in 0..64u32 {
                        if is_legal(black_box(board), from, to, Color::White) {
                            legal += 1;
                        }
                    }
                }
                assert_eq!(legal, expected);
                black_box(legal)
            });
        });
    }

    group.finish();
}

fn bench_computer_move(c: &mut Criterion) {
    let agent = ComputerAgent::new();
    let mut group = c.benchmark_group("computer_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(50);

    for case in CASES {
        let board = case_board(case);
        let move_count = case.moves.len() as u32;

        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let bench_name = format!("{}_{:?}", case.name, difficulty).to_lowercase();
            group.bench_function(bench_name, |b| {
                b.iter(|| {
                    let mv = agent
                        .select_move(black_box(&board), difficulty, 1, black_box(move_count))
                        .expect("black has legal moves in every bench position");
                    black_box(mv)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(computer_move_benches, bench_validation_sweep, bench_computer_move);
criterion_main!(computer_move_benches);
