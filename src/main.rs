//! Skill Requirements - demo console
//!
//! Stands in for the host game server: maintains a handful of actors, a
//! world clock, and the learn checkpoint, and drives the gate and the
//! administrative commands from stdin.

use skill_requirements::commands;
use skill_requirements::core::error::Result;
use skill_requirements::core::types::{SkillId, UserId};
use skill_requirements::core::WorldClock;
use skill_requirements::gate::{stars_for, LearnGate};
use skill_requirements::rules::RequirementsStore;
use skill_requirements::skills::{SkillCatalog, SkillSnapshot};

use ahash::AHashMap;
use std::io::{self, Write};

const CONFIG_PATH: &str = "SkillRequirements.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("skill_requirements=info")
        .init();

    tracing::info!("Skill Requirements demo starting...");

    let catalog = SkillCatalog::with_skills([
        "Archery", "Tracking", "Smithing", "Farming", "Hunting", "Butchery", "Cooking", "Masonry",
    ]);

    let store = RequirementsStore::load_or_default(CONFIG_PATH)?;
    let mut gate = LearnGate::new(store.clone());
    let mut clock = WorldClock::new(1000);
    let mut actors: AHashMap<UserId, SkillSnapshot> = AHashMap::new();

    println!("\n=== SKILL REQUIREMENTS ===");
    println!("Gate is {}, config at {}", status_word(&gate), CONFIG_PATH);
    println!();
    println!("Commands:");
    println!("  learn <user> <skill>      - Attempt to learn a skill");
    println!("  grant <user> <skill>      - Grant a requirements bypass");
    println!("  revoke <user> <skill>     - Revoke a requirements bypass");
    println!("  day <skill> <day>         - Set earliest learn day");
    println!("  toggle [save]             - Flip the gate (save persists)");
    println!("  tick <n>                  - Advance the clock n ticks");
    println!("  status / s                - Show gate, day, and actors");
    println!("  quit / q                  - Exit");
    println!();

    loop {
        print!("day {:.2}> ", clock.current_day());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["quit" | "q"] => break,
            ["status" | "s"] => display_status(&gate, &clock, &actors),
            ["tick", n] => match n.parse::<u64>() {
                Ok(n) => clock.advance_by(n),
                Err(_) => println!("tick wants a number"),
            },
            ["toggle"] => println!("{}", commands::toggle(&mut gate, false)),
            ["toggle", "save"] => println!("{}", commands::toggle(&mut gate, true)),
            ["grant", user, skill] => {
                report(commands::allow_bypass(&store, &catalog, &UserId::from(*user), skill))
            }
            ["revoke", user, skill] => {
                report(commands::disallow_bypass(&store, &catalog, &UserId::from(*user), skill))
            }
            ["day", skill, day] => match day.parse::<f64>() {
                Ok(day) => report(commands::set_earliest_day(
                    &store, &catalog, &clock, skill, day,
                )),
                Err(_) => println!("day wants a number"),
            },
            ["learn", user, skill] => {
                attempt_learn(&gate, &mut actors, &UserId::from(*user), skill, &clock)
            }
            [] => {}
            _ => println!("Unknown command"),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

/// Run one learn attempt through the gate the way the host checkpoint would
fn attempt_learn(
    gate: &LearnGate,
    actors: &mut AHashMap<UserId, SkillSnapshot>,
    user: &UserId,
    skill_name: &str,
    clock: &WorldClock,
) {
    let skill = SkillId::from(skill_name);
    let snapshot = actors.entry(user.clone()).or_default().clone();
    let now = clock.current_day();

    let verdict = gate.evaluate(user, &snapshot, &skill, now);
    for notice in verdict.notices(&skill) {
        println!("[info] {notice}");
    }

    match &verdict {
        skill_requirements::gate::Verdict::Admit { .. } => {
            let stars = stars_for(&verdict);
            actors.entry(user.clone()).or_default().set_level(skill.clone(), 1);
            println!("{user} learned {skill} for {stars} star(s).");
        }
        skill_requirements::gate::Verdict::Deny { reasons } => {
            for reason in reasons {
                println!("[error] {}", reason.message(&skill));
            }
        }
    }
}

fn display_status(
    gate: &LearnGate,
    clock: &WorldClock,
    actors: &AHashMap<UserId, SkillSnapshot>,
) {
    println!("Gate: {}", status_word(gate));
    println!("Day:  {:.2} (tick {})", clock.current_day(), clock.current_tick());
    if actors.is_empty() {
        println!("No actors yet - try `learn alice Archery`");
    }
    for (user, snapshot) in actors.iter() {
        println!("  {user}: {} skill(s)", snapshot.len());
    }
}

fn status_word(gate: &LearnGate) -> &'static str {
    if gate.is_active() {
        "active"
    } else {
        "inactive"
    }
}

fn report(result: Result<String>) {
    match result {
        Ok(msg) => println!("{msg}"),
        Err(e) => println!("[error] {e}"),
    }
}
