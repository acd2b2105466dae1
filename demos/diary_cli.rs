//! Seed a diary from the network, then create, edit and remove a few entries.
//!
//! Set `DIARYFOLD_SEED_URL` to point at another record source. If the fetch
//! fails the diary simply starts empty.

use diaryfold::{
    Emotion, EntryStore, HttpSeedSource, SeedConfig, SeedLoader, validate_edit_content,
};

fn print_summary(store: &mut EntryStore) {
    println!("Entries: {}", store.len());
    let stats = *store.analytics();
    println!("  good: {}", stats.good_count);
    println!("  bad:  {}", stats.bad_count);
    match stats.ratio_display() {
        Some(ratio) => println!("  good ratio: {ratio}%"),
        None => println!("  good ratio: n/a (no entries)"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SeedConfig::default().with_env_overrides()?;
    let source = HttpSeedSource::from_config(&config)?;
    let mut loader = SeedLoader::from_config(&config);
    let mut store = EntryStore::new();

    match loader.load(&mut store, &source).await {
        Ok(n) => println!("Seeded {n} entries from {}", source.url()),
        Err(e) => println!("Could not seed from {}: {e}", source.url()),
    }
    print_summary(&mut store);

    let id = store.create("me", "Finished the release today", Emotion::new(5)?);
    println!("\nCreated entry #{id}");

    for attempt in ["ok", "Finished the release today, finally"] {
        match validate_edit_content(attempt) {
            Ok(()) => {
                store.edit(id, attempt);
                println!("Edited entry #{id}");
            }
            Err(e) => println!("Rejected edit {attempt:?}: {e}"),
        }
    }

    if let Some(oldest) = store.entries().last().map(|e| e.id) {
        store.remove(oldest);
        println!("Removed entry #{oldest}");
    }

    println!("\nLatest entries:");
    for entry in store.entries().iter().take(3) {
        println!(
            "  #{} [{}] {}: {}",
            entry.id, entry.emotion, entry.author, entry.content
        );
    }
    println!();
    print_summary(&mut store);

    Ok(())
}
