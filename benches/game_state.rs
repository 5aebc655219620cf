use pile_engine::{GameRng, GameState, PlayerId};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        dealing_four_players,
        checking_loss_on_full_deal,
        cloning_mid_game_state,
}

fn four_player_game(seed: u64) -> GameState {
    let mut game = GameState::default();
    let players = ["ann", "bob", "cat", "dan"].map(PlayerId::new);
    game.start(players, &mut GameRng::new(seed));
    game
}

fn dealing_four_players(c: &mut criterion::Criterion) {
    c.bench_function("deal a four-player game", |b| {
        b.iter(|| four_player_game(criterion::black_box(9)))
    });
}

fn checking_loss_on_full_deal(c: &mut criterion::Criterion) {
    let game = four_player_game(9);
    c.bench_function("check loss with four full hands", |b| {
        b.iter(|| criterion::black_box(&game).is_lost())
    });
}

fn cloning_mid_game_state(c: &mut criterion::Criterion) {
    let game = four_player_game(9);
    c.bench_function("clone a dealt game", |b| {
        b.iter(|| criterion::black_box(&game).clone())
    });
}
