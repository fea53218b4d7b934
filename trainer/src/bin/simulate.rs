use std::time::Instant;

use cwm::simulation::{simulate_batch, summarize, SyntheticParticipant};

struct Args {
    participant: SyntheticParticipant,
    trials: usize,
    sessions: usize,
    seed: u64,
    output: Option<String>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(raw) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        std::process::exit(1);
    })
}

fn print_usage() {
    println!(
        "Usage: cwm-simulate [--span F] [--slope F] [--lapse F] [--trials N] [--sessions N] [--seed S] [--output FILE]"
    );
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut participant = SyntheticParticipant::default();
    let mut trials = 60usize;
    let mut sessions = 1000usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--span" => {
                i += 1;
                participant.span = parse_value(flag, args.get(i));
            }
            "--slope" => {
                i += 1;
                participant.slope = parse_value(flag, args.get(i));
            }
            "--lapse" => {
                i += 1;
                participant.lapse = parse_value(flag, args.get(i));
            }
            "--trials" => {
                i += 1;
                trials = parse_value(flag, args.get(i));
            }
            "--sessions" => {
                i += 1;
                sessions = parse_value(flag, args.get(i));
            }
            "--seed" => {
                i += 1;
                seed = parse_value(flag, args.get(i));
            }
            "--output" => {
                i += 1;
                output = Some(parse_value(flag, args.get(i)));
            }
            "--help" | "-h" => {
                print_usage();
                println!();
                println!("Simulate the level staircase against a synthetic participant.");
                println!();
                println!("Options:");
                println!("  --span F       Participant span (default: 4.0)");
                println!("  --slope F      Psychometric slope (default: 1.5)");
                println!("  --lapse F      Lapse rate (default: 0.05)");
                println!("  --trials N     Trials per session (default: 60)");
                println!("  --sessions N   Number of sessions (default: 1000)");
                println!("  --seed S       RNG seed (default: 42)");
                println!("  --output FILE  Write summary and traces as JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !(0.0..=1.0).contains(&participant.lapse) {
        eprintln!("--lapse must be in [0, 1], got {}", participant.lapse);
        std::process::exit(1);
    }

    Args {
        participant,
        trials,
        sessions,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();
    let p = &args.participant;
    println!(
        "Simulating {} sessions x {} trials (span={:.2}, slope={:.2}, lapse={:.3}, seed={})",
        args.sessions, args.trials, p.span, p.slope, p.lapse, args.seed
    );

    let start = Instant::now();
    let traces = simulate_batch(p, args.trials, args.sessions, args.seed);
    let summary = summarize(&traces);
    let elapsed = start.elapsed();

    println!(
        "  Final level:  mean {:.2}  min {}  max {}",
        summary.mean_final_level, summary.min_final_level, summary.max_final_level
    );
    println!("  Tail level:   mean {:.2}", summary.mean_tail_level);
    println!("  Pass rate:    {:.1}%", summary.pass_rate * 100.0);
    println!("  Elapsed:      {:.2?}", elapsed);

    if let Some(path) = &args.output {
        let doc = serde_json::json!({
            "participant": args.participant,
            "summary": summary,
            "sessions": traces,
        });
        let json = match serde_json::to_string_pretty(&doc) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(path, json) {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Wrote {}", path);
    }
}
