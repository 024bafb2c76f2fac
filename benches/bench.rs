// Criterion benchmarks for pawmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawmatch::core::{calculate_match_score, Matcher};
use pawmatch::models::{
    ActivityAnswer, Animal, ExperienceAnswer, KindPreference, MatchAnswers, SpaceAnswer,
    TimeAnswer,
};

fn create_animal(id: usize) -> Animal {
    Animal {
        animal_id: id as i64,
        animal_kind: if id % 2 == 0 { "狗" } else { "貓" }.to_string(),
        animal_sex: if id % 3 == 0 { "M" } else { "F" }.to_string(),
        animal_bodytype: ["SMALL", "MEDIUM", "BIG"][id % 3].to_string(),
        animal_colour: "黑色".to_string(),
        animal_age: if id % 4 == 0 { "CHILD" } else { "ADULT" }.to_string(),
        animal_sterilization: "T".to_string(),
        shelter_name: format!("收容所 {}", id % 20),
        shelter_address: String::new(),
        shelter_tel: String::new(),
        album_file: if id % 10 == 0 {
            String::new()
        } else {
            format!("https://img.example/{}.jpg", id)
        },
    }
}

fn create_answers() -> MatchAnswers {
    MatchAnswers {
        space: SpaceAnswer::Medium,
        activity: ActivityAnswer::High,
        experience: ExperienceAnswer::Some,
        time: TimeAnswer::Plenty,
        preference: KindPreference::Any,
    }
}

fn bench_scoring(c: &mut Criterion) {
    let animal = create_animal(2);
    let answers = create_answers();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&animal), black_box(&answers)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::new(6);
    let answers = create_answers();

    let mut group = c.benchmark_group("ranking");

    for pool_size in [10, 50, 100, 500, 1000].iter() {
        let pool: Vec<Animal> = (0..*pool_size).map(create_animal).collect();

        group.bench_with_input(BenchmarkId::new("rank", pool_size), pool_size, |b, _| {
            b.iter(|| matcher.rank(black_box(&pool), black_box(&answers)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring, bench_ranking);
criterion_main!(benches);
