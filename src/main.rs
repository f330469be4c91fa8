mod model;
mod splitter;

use clap::Parser;
use comfy_table::{Attribute, Cell, Color, Table};
use inquire::{Confirm, Select, Text};

use crate::model::{Bill, Participant};
use crate::splitter::BillSplitter;

// ==========================================
// Constants
// ==========================================
const MENU_ADD_PEOPLE: &str = "➕ Add People";
const MENU_EDIT: &str = "✏️ Edit Participant";
const MENU_SAVE: &str = "💾 Save Bill";
const MENU_VIEW: &str = "📋 View Saved Bills";
const MENU_QUIT: &str = "🚪 Quit";

const NEGATIVE_RED: Color = Color::Rgb { r: 185, g: 28, b: 28 };

// ==========================================
// CLI
// ==========================================

#[derive(Parser)]
#[command(name = "bill-splitter")]
#[command(about = "Split a shared bill among a group, with per-person overrides")]
struct Cli {
    /// Prefill the bill name
    #[arg(long)]
    title: Option<String>,
    /// Prefill the total amount
    #[arg(long)]
    total: Option<String>,
    /// Prefill the number of people
    #[arg(long)]
    people: Option<String>,
}

// ==========================================
// Main Loop
// ==========================================

fn main() {
    let cli = Cli::parse();

    let mut app = BillSplitter::new();
    if let Some(title) = cli.title {
        app.set_title(title);
    }
    if let Some(total) = cli.total {
        app.set_total_text(total);
    }
    if let Some(people) = cli.people {
        app.set_count_text(people);
    }

    println!("💰 --- Bill Splitter ---");

    loop {
        let options = vec![MENU_ADD_PEOPLE, MENU_EDIT, MENU_SAVE, MENU_VIEW, MENU_QUIT];
        match Select::new("Menu:", options).prompt() {
            Ok(MENU_ADD_PEOPLE) => add_people(&mut app),
            Ok(MENU_EDIT) => edit_participant(&mut app),
            Ok(MENU_SAVE) => save_current_bill(&mut app),
            Ok(MENU_VIEW) => view_saved_bills(&mut app),
            _ => break,
        }
    }
}

// ==========================================
// 1. Draft Form & Generation
// ==========================================

fn add_people(app: &mut BillSplitter) {
    let Ok(title) = Text::new("Bill Name:").with_default(app.title()).prompt() else {
        return;
    };
    let Ok(total) = Text::new("Total Amount:").with_default(app.total_text()).prompt() else {
        return;
    };
    let Ok(count) = Text::new("Number of People:").with_default(app.count_text()).prompt() else {
        return;
    };

    app.set_title(title);
    app.set_total_text(total);
    app.set_count_text(count);

    match app.generate_participants() {
        Ok(()) => print_participants(app),
        Err(e) => println!("❌ {e}"),
    }
}

// ==========================================
// 2. Participant Edits
// ==========================================

fn edit_participant(app: &mut BillSplitter) {
    if app.participants().is_empty() {
        println!("❌ No participants yet. Add people first.");
        return;
    }

    let labels: Vec<String> = app.participants().iter().map(participant_label).collect();
    let Ok(choice) = Select::new("Select Participant:", labels).raw_prompt() else {
        return;
    };
    let id = app.participants()[choice.index].id;

    let Ok(field) = Select::new("Edit:", vec!["Name", "Amount"]).prompt() else {
        return;
    };

    if field == "Name" {
        let Ok(name) = Text::new("Participant Name:").prompt() else {
            return;
        };
        app.set_participant_name(id, name);
    } else {
        let Ok(text) = Text::new("Amount ($):").prompt() else {
            return;
        };
        if let Err(e) = app.set_participant_amount(id, &text) {
            println!("❌ {e}");
            return;
        }
    }
    print_participants(app);
}

fn participant_label(p: &Participant) -> String {
    format!("{}: {} - ${:.2}", p.id, display_name(p), p.amount)
}

fn display_name(p: &Participant) -> &str {
    if p.name.is_empty() { "No Name" } else { &p.name }
}

// ==========================================
// 3. Save
// ==========================================

fn save_current_bill(app: &mut BillSplitter) {
    match app.save_bill() {
        Ok(_) => println!("✅ Bill saved successfully!"),
        Err(e) => println!("❌ {e}"),
    }
}

// ==========================================
// 4. Saved Bills & Detail View
// ==========================================

fn view_saved_bills(app: &mut BillSplitter) {
    if app.saved_bills().is_empty() {
        println!("(No saved bills yet)");
        return;
    }

    let labels: Vec<String> = app
        .saved_bills()
        .iter()
        .map(|b| {
            format!(
                "{}. {} - ${:.2} (saved {})",
                b.id,
                b.title,
                b.total_amount,
                b.saved_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();

    let Ok(choice) = Select::new("Saved Bills:", labels).raw_prompt() else {
        return;
    };
    app.select_bill(choice.index);

    if let Some(bill) = app.selected_bill() {
        print_bill_detail(bill);

        if let Ok(true) = Confirm::new("Export this bill as JSON?").with_default(false).prompt() {
            match serde_json::to_string_pretty(bill) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("❌ JSON export failed: {e}"),
            }
        }
        let _ = Confirm::new("Close details?").with_default(true).prompt();
    }
    app.close_detail();
}

// ==========================================
// 5. Rendering
// ==========================================

fn print_participants(app: &BillSplitter) {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Name"),
        Cell::new("Amount"),
        Cell::new("Fixed"),
    ]);

    for p in app.participants() {
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(display_name(p)),
            amount_cell(p.amount),
            Cell::new(if p.is_fixed { "yes" } else { "" }),
        ]);
    }

    // Footer makes rounding drift visible; it is accepted, not corrected.
    table.add_row(vec![
        Cell::new("Sum").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("${:.2} of ${}", app.draft_sum(), app.total_text()))
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("{table}");
}

fn print_bill_detail(bill: &Bill) {
    println!("\n--- Bill Details: {} ---", bill.title);
    println!("Total: ${:.2}", bill.total_amount);
    println!("Saved: {}", bill.saved_at.format("%Y-%m-%d %H:%M"));

    let mut table = Table::new();
    table.set_header(vec![Cell::new("Person"), Cell::new("Amount"), Cell::new("Fixed")]);
    for p in &bill.participants {
        table.add_row(vec![
            Cell::new(display_name(p)),
            amount_cell(p.amount),
            Cell::new(if p.is_fixed { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
}

fn amount_cell(amount: f64) -> Cell {
    let cell = Cell::new(format!("${:.2}", amount));
    if amount < 0.0 { cell.fg(NEGATIVE_RED) } else { cell }
}
