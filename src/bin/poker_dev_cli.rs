// src/bin/poker_dev_cli.rs

use std::io::{self, BufRead, Write};
use std::thread;

use holdem_sim::advice::AdviceService;
use holdem_sim::api::GameViewDto;
use holdem_sim::domain::chips::Chips;
use holdem_sim::domain::hand::Phase;
use holdem_sim::domain::table::Difficulty;
use holdem_sim::domain::PlayerId;
use holdem_sim::engine::{PlayerActionKind, PokerSession, RandomSource};
use holdem_sim::infra::{GameConfig, SystemRng};

const HELP: &str = "\
команды:
  f            – fold
  c            – check / call
  r [сумма]    – raise до суммы (без суммы – минимальный)
  a            – all-in
  h            – совет тренера
  d <уровень>  – сложность ботов: easy | medium | hard
  ?            – эта подсказка
  q            – выход";

enum Input {
    Act(PlayerActionKind),
    Advice,
    Difficulty(Difficulty),
    Help,
    Quit,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("не удалось загрузить конфиг {path}: {e}");
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("не удалось запустить tokio runtime: {e}");
            std::process::exit(2);
        }
    };
    let advice = AdviceService::from_env();

    println!("poker_dev_cli: Texas Hold'em против ботов.");
    println!("{HELP}");

    let pacing = config.pacing.clone();
    let mut session = PokerSession::new(config, SystemRng);
    let hero = session.state().human_index().map(|i| session.state().players[i].id);

    if let Err(e) = session.initialize_game() {
        eprintln!("не удалось начать игру: {e}");
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_rendered = String::new();

    loop {
        let view = session.view(hero);
        let rendered = render(&view);
        if rendered != last_rendered {
            println!("{rendered}");
            last_rendered = rendered;
        }

        if view.session_over {
            println!("{}", view.message);
            print!("Сыграть ещё? (y/n) ");
            let _ = io::stdout().flush();
            match lines.next() {
                Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => {
                    if let Err(e) = session.initialize_game() {
                        eprintln!("ошибка: {e}");
                        return;
                    }
                    continue;
                }
                _ => return,
            }
        }

        let state = session.state();
        match state.phase {
            Phase::Showdown => {
                thread::sleep(pacing.showdown_pause());
                if let Err(e) = session.start_new_hand() {
                    eprintln!("ошибка: {e}");
                    return;
                }
            }
            Phase::Waiting => {
                if let Err(e) = session.start_new_hand() {
                    eprintln!("ошибка: {e}");
                    return;
                }
            }
            _ if state.awaiting_runout() => {
                thread::sleep(pacing.runout_tick());
                session.proceed();
            }
            _ if session.is_human_turn() => {
                let Some(hero_id) = hero else { return };
                match read_input(&mut lines, &view) {
                    Input::Quit => return,
                    Input::Help => println!("{HELP}"),
                    Input::Difficulty(d) => {
                        session.set_difficulty(d);
                        println!("Сложность ботов: {d} (со следующей раздачи)");
                    }
                    Input::Advice => {
                        let text = runtime.block_on(advice.strategic_advice(session.state(), hero_id));
                        println!("Тренер: {text}");
                    }
                    Input::Act(action) => submit_human(&mut session, hero_id, action),
                }
            }
            _ => {
                let unit = session.rng_mut().gen_unit();
                thread::sleep(pacing.bot_think(unit));
                if let Some(Err(e)) = session.play_bot_turn() {
                    eprintln!("бот: {e}");
                    return;
                }
            }
        }
    }
}

fn submit_human(session: &mut PokerSession<SystemRng>, hero: PlayerId, action: PlayerActionKind) {
    if let Err(e) = session.submit_action(hero, action) {
        println!("Нельзя: {e}");
    }
}

fn read_input<B: BufRead>(lines: &mut io::Lines<B>, view: &GameViewDto) -> Input {
    loop {
        if let Some(legal) = &view.hero_actions {
            let call = if legal.can_check {
                "check".to_string()
            } else {
                format!("call {}", legal.call_amount)
            };
            print!(
                "Ваш ход [{} | raise {}..{}]> ",
                call, legal.min_raise_to, legal.max_raise_to
            );
        } else {
            print!("> ");
        }
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => return Input::Quit,
        };

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();
        let can_check = view.hero_actions.as_ref().is_some_and(|l| l.can_check);

        let parsed = match cmd {
            "f" => Some(Input::Act(PlayerActionKind::Fold)),
            "c" if can_check => Some(Input::Act(PlayerActionKind::Check)),
            "c" => Some(Input::Act(PlayerActionKind::Call)),
            "a" => Some(Input::Act(PlayerActionKind::AllIn)),
            "r" => match arg.map(str::parse::<u64>) {
                None => Some(Input::Act(PlayerActionKind::Raise(None))),
                Some(Ok(to)) => Some(Input::Act(PlayerActionKind::Raise(Some(Chips(to))))),
                Some(Err(_)) => None,
            },
            "h" => Some(Input::Advice),
            "d" => arg.and_then(|a| a.parse().ok()).map(Input::Difficulty),
            "?" => Some(Input::Help),
            "q" => Some(Input::Quit),
            _ => None,
        };

        match parsed {
            Some(input) => return input,
            None => println!("Не понял. ? – подсказка."),
        }
    }
}

fn render(view: &GameViewDto) -> String {
    let mut out = String::new();
    let board: Vec<String> = view.community_cards.iter().map(|c| c.to_string()).collect();

    out.push_str(&format!(
        "\n=== Раздача #{} | {} | банк {} | ставка {} | {} ===\n",
        view.hand_number,
        view.phase,
        view.pot,
        view.current_bet,
        view.message
    ));
    out.push_str(&format!(
        "Борд: {}\n",
        if board.is_empty() { "-".to_string() } else { board.join(" ") }
    ));

    for p in &view.players {
        let marker = if view.current_player_index == Some(p.seat_index) {
            ">"
        } else {
            " "
        };
        let dealer = if p.is_dealer { "(D)" } else { "   " };
        let cards = match &p.hole_cards {
            Some(cards) => cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
            None => "?? ??".to_string(),
        };
        let action = p.last_action.map(|a| a.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{marker} {dealer} {:<6} {:>7} ставка {:>5} {:<10} {:<6} {}\n",
            p.name,
            p.chips.to_string(),
            p.current_bet.to_string(),
            format!("{:?}", p.status),
            action,
            cards
        ));
    }

    for w in &view.winners {
        let name = view
            .players
            .iter()
            .find(|p| p.player_id == w.player_id)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        out.push_str(&format!("  {} выигрывает {} – {}\n", name, w.amount, w.hand_name));
    }

    out
}
