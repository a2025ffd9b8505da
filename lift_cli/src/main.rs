use clap::Parser;
use lift_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "lift")]
#[command(about = "Single-session workout logging and progress stats", long_about = None)]
struct Cli {
    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit `stats` output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    lift_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut session = Session::new(config, cli.json);
    session.print_banner();

    // Interactive loop - all state lives for the lifetime of this session
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if !session.handle(line.trim())? {
            break;
        }
    }

    Ok(())
}

/// One interactive tracking session: a staging builder plus the repository of
/// workouts saved so far. Nothing survives past process exit.
struct Session {
    builder: WorkoutBuilder,
    repository: WorkoutRepository,
    config: Config,
    json: bool,
}

impl Session {
    fn new(config: Config, json: bool) -> Self {
        Self {
            builder: WorkoutBuilder::new(),
            repository: WorkoutRepository::new(),
            config,
            json,
        }
    }

    fn print_banner(&self) {
        println!("╭─────────────────────────────────────────╮");
        println!("│  LIFT - track your strength journey     │");
        println!("╰─────────────────────────────────────────╯");
        println!("Type 'help' for commands.");
    }

    /// Dispatch one input line. Returns false when the session should end.
    fn handle(&mut self, line: &str) -> Result<bool> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match command {
            "" => {}
            "help" => self.cmd_help(),
            "add" => self.cmd_add(&args),
            "newset" => self.cmd_newset(&args),
            "set" => self.cmd_set(&args),
            "delset" => self.cmd_delset(&args),
            "delex" => self.cmd_delex(&args),
            "show" => self.cmd_show(),
            "save" => self.cmd_save(),
            "history" => self.cmd_history(),
            "delete" => self.cmd_delete(&args),
            "stats" => self.cmd_stats()?,
            "quit" | "exit" => return Ok(false),
            other => println!("Unknown command: {}. Type 'help' for commands.", other),
        }

        Ok(true)
    }

    fn cmd_help(&self) {
        println!("Log a workout:");
        println!("  add <name>                     add an exercise");
        println!("  newset <exercise#>             add a set to an exercise");
        println!("  set <exercise#> <set#> <reps> <weight>");
        println!("                                 record reps and weight for a set");
        println!("  delset <exercise#> <set#>      remove a set");
        println!("  delex <exercise#>              remove an exercise");
        println!("  show                           show the workout in progress");
        println!("  save                           save the workout");
        println!();
        println!("Review:");
        println!("  history                        list saved workouts, newest first");
        println!("  delete <workout#>              delete a saved workout");
        println!("  stats                          progress statistics");
        println!();
        println!("  quit                           end the session");
    }

    fn cmd_add(&mut self, args: &[&str]) {
        let name = args.join(" ");
        // Blank names are silently refused, same as the core
        if let Some(_id) = self.builder.add_exercise(&name) {
            println!(
                "Added {} (exercise #{})",
                name.trim(),
                self.builder.exercises().len()
            );
        }
    }

    fn cmd_newset(&mut self, args: &[&str]) {
        let Some(id) = self.resolve_exercise(args.first()) else {
            return;
        };
        self.builder.add_set(id);
    }

    fn cmd_set(&mut self, args: &[&str]) {
        if args.len() != 4 {
            println!("Usage: set <exercise#> <set#> <reps> <weight>");
            return;
        }
        let Some(id) = self.resolve_exercise(args.first()) else {
            return;
        };
        let Some(set_index) = parse_index(args[1]) else {
            println!("Invalid set number: {}", args[1]);
            return;
        };
        let (Ok(reps), Ok(weight)) = (args[2].parse::<i64>(), args[3].parse::<i64>()) else {
            println!("Reps and weight must be whole numbers");
            return;
        };

        self.builder.update_set(id, set_index, SetField::Reps, reps);
        self.builder.update_set(id, set_index, SetField::Weight, weight);
    }

    fn cmd_delset(&mut self, args: &[&str]) {
        if args.len() != 2 {
            println!("Usage: delset <exercise#> <set#>");
            return;
        }
        let Some(id) = self.resolve_exercise(args.first()) else {
            return;
        };
        let Some(set_index) = parse_index(args[1]) else {
            println!("Invalid set number: {}", args[1]);
            return;
        };

        if let Err(e) = self.builder.remove_set(id, set_index) {
            println!("{}", e);
        }
    }

    fn cmd_delex(&mut self, args: &[&str]) {
        if let Some(id) = self.resolve_exercise(args.first()) {
            self.builder.remove_exercise(id);
        }
    }

    fn cmd_show(&self) {
        if self.builder.is_empty() {
            println!("No exercises added yet. Start by adding your first exercise.");
            return;
        }
        for (i, exercise) in self.builder.exercises().iter().enumerate() {
            println!("{}. {}", i + 1, exercise.name);
            self.print_set_table(&exercise.sets);
        }
    }

    fn cmd_save(&mut self) {
        match self.builder.commit() {
            Ok(workout) => {
                self.repository.insert_front(workout);
                println!("✓ Workout saved!");
            }
            Err(Error::EmptyWorkout) => {
                println!("Nothing to save - add an exercise first.");
            }
            Err(e) => println!("{}", e),
        }
    }

    fn cmd_history(&self) {
        if self.repository.is_empty() {
            println!("No workouts logged yet. Complete your first workout to see it here!");
            return;
        }
        for (i, workout) in self.repository.iter().enumerate() {
            let count = workout.exercises.len();
            println!(
                "#{} - {} ({} exercise{})",
                i + 1,
                workout.date.format("%b %e, %Y %H:%M"),
                count,
                plural(count)
            );
            for exercise in &workout.exercises {
                println!("  {}", exercise.name);
                self.print_set_table(&exercise.sets);
            }
        }
    }

    fn cmd_delete(&mut self, args: &[&str]) {
        let Some(index) = args.first().and_then(|a| parse_index(a)) else {
            println!("Usage: delete <workout#>");
            return;
        };
        let id = self.repository.get(index).map(|w| w.id);
        match id {
            Some(id) => {
                self.repository.delete_by_id(id);
                println!("✓ Workout deleted");
            }
            None => println!("No workout #{}", index + 1),
        }
    }

    fn cmd_stats(&self) -> Result<()> {
        let stats = compute_stats(&self.repository, self.config.stats.top_exercises);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        if self.repository.is_empty() {
            println!("Complete some workouts to see your progress stats!");
            return Ok(());
        }

        println!("Total Workouts:  {}", stats.total_workouts);
        println!("Total Exercises: {}", stats.total_exercises);
        println!("Total Sets:      {}", stats.total_sets);
        println!(
            "Total Volume:    {} {} lifted (reps × weight)",
            stats.total_volume, self.config.display.weight_unit
        );

        if let Some((_, top_count)) = stats.top_exercises.first() {
            println!();
            println!("Most Frequent Exercises:");
            for (rank, (name, count)) in stats.top_exercises.iter().enumerate() {
                let bar_len = (count * 24 / top_count.max(&1)) as usize;
                println!(
                    "  {}. {:<20} {:>3} workout{}  {}",
                    rank + 1,
                    name,
                    count,
                    plural(*count as usize),
                    "█".repeat(bar_len)
                );
            }
        }

        Ok(())
    }

    /// Map a 1-based display index to the staged exercise's id.
    fn resolve_exercise(&self, arg: Option<&&str>) -> Option<Uuid> {
        let Some(index) = arg.and_then(|a| parse_index(a)) else {
            println!("Expected an exercise number");
            return None;
        };
        match self.builder.exercises().get(index) {
            Some(exercise) => Some(exercise.id),
            None => {
                println!("No exercise #{}", index + 1);
                None
            }
        }
    }

    fn print_set_table(&self, sets: &[Set]) {
        println!("     Set   Reps   Weight");
        for (i, set) in sets.iter().enumerate() {
            println!(
                "     {:<5} {:<6} {} {}",
                i + 1,
                set.reps,
                set.weight,
                self.config.display.weight_unit
            );
        }
    }
}

/// Parse a 1-based display index into a 0-based one.
fn parse_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
