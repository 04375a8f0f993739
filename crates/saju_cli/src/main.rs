use std::fmt::Display;

use clap::{Args, Parser, Subcommand};
use saju_rs::{
    BranchFinding, ChartConfig, ChartResult, CompatibilityResult, DailyFortune, Element,
    ElementBalance, FortuneConfig, Gender, GroupFinding, LateZiPolicy, LuckCycleConfig,
    LuckOverview, MonthlyFortune, Position, PunishmentFinding, StarFinding, StarReport,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Saju four-pillar chart CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log verbosity: -v debug, -vv trace (default: RUST_LOG or warn)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Birth {
    /// Local birth date (YYYY-MM-DD)
    date: String,
    /// Local birth time (HH:MM); omit when unknown
    #[arg(long)]
    time: Option<String>,
    /// Handling of 23:00-23:59 births: next-day (default) or same-day
    #[arg(long, default_value = "next-day")]
    late_zi: LateZiPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars with element, ten-god and branch analysis
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Day pillar of a date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// All twelve hour pillars of a date
    Hours {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Decade luck pillars and annual pillars
    Luck {
        #[command(flatten)]
        birth: Birth,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Number of decade pillars (1-12)
        #[arg(long, default_value = "8")]
        count: u8,
        /// Reference year for the current pillar (default: this year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Fortune of one day
    Daily {
        #[command(flatten)]
        birth: Birth,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        on: String,
    },
    /// Fortune of one month with lucky and caution days
    Monthly {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        /// Minimum score of a lucky day
        #[arg(long, default_value = "75")]
        lucky_threshold: u8,
        /// Maximum score of a caution day
        #[arg(long, default_value = "40")]
        caution_threshold: u8,
        /// Number of lucky days to report
        #[arg(long, default_value = "5")]
        max_lucky_days: usize,
        /// Number of caution days to report
        #[arg(long, default_value = "3")]
        max_caution_days: usize,
    },
    /// Score of every day in a month
    Calendar {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
    /// Compatibility of two charts
    Compat {
        /// First birth date (YYYY-MM-DD)
        first: String,
        /// Second birth date (YYYY-MM-DD)
        second: String,
        /// First birth time (HH:MM)
        #[arg(long)]
        first_time: Option<String>,
        /// Second birth time (HH:MM)
        #[arg(long)]
        second_time: Option<String>,
    },
    /// Auspicious and inauspicious stars
    Stars {
        #[command(flatten)]
        birth: Birth,
    },
    /// Day-master strength and favorable element
    Balance {
        #[command(flatten)]
        birth: Birth,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn load_chart(birth: &Birth) -> ChartResult {
    let config = ChartConfig {
        late_zi: birth.late_zi,
    };
    or_exit(saju_rs::chart_with_config(
        &birth.date,
        birth.time.as_deref(),
        &config,
    ))
}

fn positions(list: &[Position]) -> String {
    list.iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn print_pair_findings(label: &str, findings: &[BranchFinding]) {
    for f in findings {
        let element = f.element.map(|e| format!(" -> {e}")).unwrap_or_default();
        println!(
            "  {label:<10} {}{} ({}-{}){element}",
            f.branches.0, f.branches.1, f.first, f.second
        );
    }
}

fn print_group_findings(label: &str, findings: &[GroupFinding]) {
    for g in findings {
        println!(
            "  {label:<10} {} ({})",
            g.element,
            positions(&g.positions)
        );
    }
}

fn print_punishments(findings: &[PunishmentFinding]) {
    for p in findings {
        let branches: String = p.branches.iter().map(|b| b.hanzi()).collect();
        println!(
            "  {:<10} {branches} {} ({})",
            "Punishment",
            p.kind.korean(),
            positions(&p.positions)
        );
    }
}

fn print_chart(c: &ChartResult) {
    let time = c
        .input
        .time
        .map(|t| format!(" {t}"))
        .unwrap_or_else(|| " (time unknown)".to_string());
    println!("Birth: {}{time}", c.input.date);
    if c.effective_date != c.input.date {
        println!("Pillars taken from {}", c.effective_date);
    }
    println!();
    for (pos, pillar) in c.pillars.iter() {
        let god = c
            .ten_gods
            .get(pos)
            .map(|g| format!("{} ({})", g.name(), g.korean()))
            .unwrap_or_else(|| "Day Master".to_string());
        let hidden: String = c
            .hidden_stems
            .get(pos)
            .map(|h| h.iter().map(|s| s.hanzi()).collect())
            .unwrap_or_default();
        println!(
            "  {:<6} {} {}  {}/{}  [{hidden:<3}]  {god}",
            pos.name(),
            pillar,
            pillar.korean(),
            pillar.stem().element(),
            pillar.branch().element(),
        );
    }
    println!();
    let dm = c.day_master;
    println!("Day master: {} {} {}", dm.stem, dm.polarity, dm.element);
    let counts: Vec<String> = c
        .elements
        .entries()
        .iter()
        .map(|(e, n)| format!("{e} {n}"))
        .collect();
    println!("Elements:   {}", counts.join("  "));
    println!("Polarity:   Yang {}  Yin {}", c.polarities.yang, c.polarities.yin);

    let rel = &c.branch_relations;
    if rel.is_empty() {
        println!("Branch relations: none");
    } else {
        println!("Branch relations:");
        print_pair_findings("Combine", &rel.combines);
        print_pair_findings("Clash", &rel.clashes);
        print_pair_findings("Harm", &rel.harms);
        print_pair_findings("Resentment", &rel.resentments);
        print_punishments(&rel.punishments);
        print_group_findings("Trine", &rel.trines);
        print_group_findings("Direction", &rel.directions);
    }
}

fn print_luck(o: &LuckOverview) {
    println!(
        "Direction: {:?}, first pillar at age {}",
        o.cycles.direction, o.cycles.start_age
    );
    println!();
    for p in &o.cycles.pillars {
        let marker = if o.current.map(|c| c.order) == Some(p.order) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:>2}. {}  ages {:>3}-{:<3} from {}  {:<18} {:>2} {:?}",
            p.order,
            p.pillar,
            p.start_age,
            p.end_age,
            p.start_year,
            p.ten_god.name(),
            p.score,
            p.trend
        );
    }
    println!();
    println!("Annual pillars (age {} in {}):", o.age, o.reference_year);
    for a in &o.annual {
        println!(
            "  {}  {}  age {:>3}  {:<18} {:>2} {:?}",
            a.year,
            a.pillar,
            a.age,
            a.ten_god.name(),
            a.score,
            a.trend
        );
    }
}

fn print_daily(f: &DailyFortune) {
    println!(
        "{}  {} {}  score {} ({:?}, {})",
        f.date,
        f.pillar,
        f.pillar.korean(),
        f.relation.score,
        f.grade,
        f.grade.korean()
    );
    println!("  Stem influence: {:?}", f.relation.stem);
    if !f.relation.combines_with.is_empty() {
        println!("  Combines with:  {}", positions(&f.relation.combines_with));
    }
    if !f.relation.clashes_with.is_empty() {
        println!("  Clashes with:   {}", positions(&f.relation.clashes_with));
    }
    println!(
        "  Lucky hours:    {:02}:00-{:02}:00",
        f.lucky_hours.0, f.lucky_hours.1
    );
    println!(
        "  Lucky element:  {} ({}; {}; {} {})",
        f.lucky.element,
        f.lucky.colors,
        f.lucky.direction,
        f.lucky.numbers[0],
        f.lucky.numbers[1]
    );
}

fn join_days(days: &[u32]) -> String {
    if days.is_empty() {
        return "none".to_string();
    }
    days.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_monthly(m: &MonthlyFortune) {
    println!(
        "{:04}-{:02}  {} {}  score {} ({:?}, {})",
        m.year,
        m.month,
        m.pillar,
        m.pillar.korean(),
        m.relation.score,
        m.grade,
        m.grade.korean()
    );
    println!("  Lucky days:   {}", join_days(&m.lucky_days));
    println!("  Caution days: {}", join_days(&m.caution_days));
}

fn print_compat(r: &CompatibilityResult) {
    println!("Total: {} ({:?}, {})", r.total, r.grade, r.grade.korean());
    println!("  Element:    {}", r.element_score);
    println!("  Branches:   {}", r.branch_score);
    println!("  Day pillar: {}", r.day_score);
    if let Some(e) = r.stem_combination {
        println!("  Day masters combine into {e}");
    }
}

fn print_star_list(label: &str, findings: &[StarFinding]) {
    println!("{label}:");
    if findings.is_empty() {
        println!("  none");
    }
    for f in findings {
        println!(
            "  {:<18} {} {}  ({})",
            f.star.name(),
            f.star.korean(),
            f.star.hanzi(),
            positions(&f.positions)
        );
    }
}

fn print_stars(r: &StarReport) {
    print_star_list("Auspicious", &r.auspicious);
    print_star_list("Inauspicious", &r.inauspicious);
    println!("Overall: {:?}", r.balance);
}

fn elements(list: &[Element]) -> String {
    if list.is_empty() {
        return "none".to_string();
    }
    list.iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_balance(b: &ElementBalance) {
    println!(
        "Day master {} is {:?} ({}), score {}",
        b.day_element,
        b.strength,
        b.strength.korean(),
        b.score
    );
    for f in &b.factors {
        println!("  {:+4}  {f:?}", f.points());
    }
    println!("  Favorable:   {}", elements(&b.favorable));
    println!("  Supporting:  {}", elements(&b.supporting));
    println!("  Unfavorable: {}", elements(&b.unfavorable));
    println!("  Adverse:     {}", elements(&b.adverse));
    println!("  Dominant:    {}", b.dominant);
    println!("  Missing:     {}", elements(&b.missing));
    for a in b.recommendations() {
        println!(
            "  {}: {}; {}; {} {}",
            a.element, a.colors, a.direction, a.numbers[0], a.numbers[1]
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json = cli.json;

    match cli.command {
        Commands::Chart { birth } => {
            let c = load_chart(&birth);
            if json {
                print_json(&c);
            } else {
                print_chart(&c);
            }
        }

        Commands::Day { date } => {
            let p = or_exit(saju_rs::day_pillar(&date));
            if json {
                print_json(&p);
            } else {
                println!("{} {} ({})", p, p.korean(), p.name());
            }
        }

        Commands::Hours { date } => {
            let hours = or_exit(saju_rs::hour_candidates(&date));
            if json {
                print_json(&hours);
            } else {
                for h in &hours {
                    println!(
                        "{:02}:00-{:02}:00  {} {}",
                        h.start_hour,
                        h.end_hour,
                        h.pillar,
                        h.pillar.korean()
                    );
                }
            }
        }

        Commands::Luck {
            birth,
            gender,
            count,
            year,
        } => {
            let c = load_chart(&birth);
            let config = LuckCycleConfig { count };
            let o = or_exit(saju_rs::luck_overview(&c, gender, &config, year));
            if json {
                print_json(&o);
            } else {
                print_luck(&o);
            }
        }

        Commands::Daily { birth, on } => {
            let c = load_chart(&birth);
            let f = or_exit(saju_rs::daily_fortune(&c, &on));
            if json {
                print_json(&f);
            } else {
                print_daily(&f);
            }
        }

        Commands::Monthly {
            birth,
            year,
            month,
            lucky_threshold,
            caution_threshold,
            max_lucky_days,
            max_caution_days,
        } => {
            let c = load_chart(&birth);
            let config = FortuneConfig {
                lucky_threshold,
                caution_threshold,
                max_lucky_days,
                max_caution_days,
            };
            let m = or_exit(saju_rs::monthly_fortune(&c, year, month, &config));
            if json {
                print_json(&m);
            } else {
                print_monthly(&m);
            }
        }

        Commands::Calendar { birth, year, month } => {
            let c = load_chart(&birth);
            let days = or_exit(saju_rs::month_calendar(&c, year, month));
            if json {
                print_json(&days);
            } else {
                for d in &days {
                    println!(
                        "{:04}-{:02}-{:02}  {}  {:>2}  {:?}",
                        year, month, d.day, d.pillar, d.score, d.grade
                    );
                }
            }
        }

        Commands::Compat {
            first,
            second,
            first_time,
            second_time,
        } => {
            let a = or_exit(saju_rs::chart(&first, first_time.as_deref()));
            let b = or_exit(saju_rs::chart(&second, second_time.as_deref()));
            let r = saju_rs::compatibility(&a, &b);
            if json {
                print_json(&r);
            } else {
                print_compat(&r);
            }
        }

        Commands::Stars { birth } => {
            let c = load_chart(&birth);
            let r = saju_rs::stars(&c);
            if json {
                print_json(&r);
            } else {
                print_stars(&r);
            }
        }

        Commands::Balance { birth } => {
            let c = load_chart(&birth);
            let b = saju_rs::balance(&c);
            if json {
                print_json(&b);
            } else {
                print_balance(&b);
            }
        }
    }
}
