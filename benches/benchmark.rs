use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use sudoku_engine::Grid;
use sudoku_engine::generator::{Difficulty, Generator};
use sudoku_engine::solver::{BacktrackingSolver, Solution};

use std::time::Duration;

// Explanation of benchmark classes:
//
// solve: The BacktrackingSolver producing the first completion of a puzzle.
// count: The uniqueness certificate, i.e. the solution count capped at two.
// generate: Full puzzle generation per difficulty tier, which dominates all
//           other operations since it runs one count per removal candidate.

const MEASUREMENT_TIME_SECS: u64 = 10;
const SOLVE_SAMPLE_SIZE: usize = 100;
const GENERATE_SAMPLE_SIZE: usize = 20;

// The puzzle is taken from the World Puzzle Federation Sudoku Grand Prix
// 2020 Round 8 (Puzzle 2).

const PUZZLE: &str = "\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

const SOLUTION: &str = "\
    7,4,6,2,8,1,3,5,9,\
    9,1,2,5,3,7,8,4,6,\
    8,5,3,4,9,6,1,7,2,\
    3,7,4,1,2,5,6,9,8,\
    6,2,8,7,4,9,5,1,3,\
    5,9,1,3,6,8,7,2,4,\
    1,6,9,8,7,4,2,3,5,\
    2,8,5,9,1,3,4,6,7,\
    4,3,7,6,5,2,9,8,1";

fn configure(group: &mut BenchmarkGroup<WallTime>, sample_size: usize) {
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(sample_size);
    group.sampling_mode(SamplingMode::Flat);
}

fn benchmark_solve(c: &mut Criterion) {
    let puzzle = Grid::parse(PUZZLE).unwrap();
    let solution = Grid::parse(SOLUTION).unwrap();
    let mut group = c.benchmark_group("solve");
    configure(&mut group, SOLVE_SAMPLE_SIZE);

    group.bench_function("classic", |b| b.iter(|| {
        assert_eq!(Some(solution), BacktrackingSolver.solve(&puzzle));
    }));
}

fn benchmark_count(c: &mut Criterion) {
    let puzzle = Grid::parse(PUZZLE).unwrap();
    let solution = Grid::parse(SOLUTION).unwrap();
    let mut group = c.benchmark_group("count");
    configure(&mut group, SOLVE_SAMPLE_SIZE);

    group.bench_function("classic", |b| b.iter(|| {
        assert_eq!(Solution::Unique(solution),
            BacktrackingSolver.count(&puzzle));
    }));
}

fn benchmark_generate_difficulty(group: &mut BenchmarkGroup<WallTime>,
        id: &str, difficulty: Difficulty) {
    let mut generator = Generator::new(ChaChaRng::seed_from_u64(0xC0FFEE));

    group.bench_function(id, |b| b.iter(|| generator.generate(difficulty)));
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    configure(&mut group, GENERATE_SAMPLE_SIZE);

    benchmark_generate_difficulty(&mut group, "easy", Difficulty::Easy);
    benchmark_generate_difficulty(&mut group, "medium", Difficulty::Medium);
    benchmark_generate_difficulty(&mut group, "hard", Difficulty::Hard);
}

criterion_group!(all,
    benchmark_solve,
    benchmark_count,
    benchmark_generate
);

criterion_main!(all);
