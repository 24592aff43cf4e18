use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_validate(c: &mut Criterion) {
    c.bench_function("cpf_validate_masked", |b| {
        b.iter(|| cadastro::cpf::validate(black_box("529.982.247-25")))
    });

    c.bench_function("cnpj_validate_masked", |b| {
        b.iter(|| cadastro::cnpj::validate(black_box("11.222.333/0001-81")))
    });
}

fn bench_mask(c: &mut Criterion) {
    c.bench_function("cpf_mask", |b| {
        b.iter(|| cadastro::cpf::mask(black_box("52998224725")))
    });
}

criterion_group!(benches, bench_validate, bench_mask);
criterion_main!(benches);
