//! Autocomplete demo
//!
//! Scripts a host driving the widget through both supported flows:
//! - client-side filtering (no `searching` flag, clear icon available),
//!   using the fuzzy filter helper to recompute options per keystroke
//! - server-driven search (`searching` toggled by the host, loading glyph)

use std::fs::File;
use std::sync::{Arc, Mutex};

use simplelog::{Config, LevelFilter, WriteLogger};
use typeahead::{filter_options, Autocomplete, AutocompleteOption, OptionsEntry};

fn countries() -> Vec<AutocompleteOption> {
    [
        ("United States", "us"),
        ("United Kingdom", "uk"),
        ("Germany", "de"),
        ("France", "fr"),
        ("Netherlands", "nl"),
        ("New Zealand", "nz"),
    ]
    .into_iter()
    .map(|(label, value)| AutocompleteOption::new(label, value))
    .collect()
}

fn print_view(label: &str, ac: &Autocomplete) {
    let view = ac.view();
    println!("--- {label}");
    println!(
        "    input: {:?} (icon {:?}, clearable {})",
        view.input.value, view.input.icon, view.input.clearable
    );
    println!(
        "    dropdown: visible={} {} item(s)",
        view.dropdown.visible,
        view.dropdown.content.len()
    );
    for node in &view.dropdown.content {
        println!("      {:?} -> {:?}", node.plain_text(), node.value());
    }
}

fn client_side_flow() {
    println!("== client-side filtering ==");
    let all = countries();

    let searches: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&searches);

    let ac = Autocomplete::builder()
        .clearable(true)
        .options(all.clone())
        .on_search(move |text| log.lock().unwrap().push(text.to_string()))
        .on_select(|value| println!("    selected: {value}"))
        .build();

    ac.handle_focus();
    print_view("focused", &ac);

    // Each keystroke: the host fuzzy-filters locally and feeds the result
    // back as the new option sequence.
    for typed in ["u", "un", "uni"] {
        ac.handle_input_change(typed);
        let filtered: Vec<OptionsEntry> = filter_options(typed, &all)
            .into_iter()
            .map(Into::into)
            .collect();
        ac.set_options(filtered);
    }
    print_view("after typing 'uni'", &ac);

    // An item picks itself through the shared context.
    let ctx = ac.context();
    ctx.select("uk");
    ctx.set_visible(false);
    print_view("after selecting", &ac);

    println!("    searches seen: {:?}", searches.lock().unwrap());
}

fn server_driven_flow() {
    println!("== server-driven search ==");
    let ac = Autocomplete::builder()
        .searching(false)
        .on_search(|text| println!("    server query: {text:?}"))
        .build();

    ac.handle_focus();
    ac.handle_input_change("ge");

    // Host kicks off its request and flips the flag.
    ac.set_searching(Some(true));
    print_view("while searching", &ac);

    // Results arrive.
    ac.set_searching(Some(false));
    ac.set_options(vec![("Germany", "de").into(), ("Georgia", "ge").into()]);
    print_view("results in", &ac);

    ac.handle_blur();
    print_view("blurred", &ac);
}

fn main() {
    let log_file = File::create("/tmp/typeahead-demo.log").expect("create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("init logger");

    client_side_flow();
    println!();
    server_driven_flow();
}
