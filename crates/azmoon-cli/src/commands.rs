use azmoon_core::validate;
use azmoon_patch::report::{PatchStatus, UpdateStatus};
use azmoon_patch::run::{apply_patches, apply_template_updates};
use azmoon_patch::{PatchError, catalog, patches};
use azmoon_storage::TestStore;
use eyre::Result;

pub fn fix(store: &TestStore) -> Result<()> {
    let reports = apply_patches(store, &patches::all_patches())?;

    for report in &reports {
        match report.status {
            PatchStatus::Applied => {
                let detail = report.detail.as_deref().unwrap_or(&report.summary);
                println!("fixed {}: {}", report.slug, detail);
            }
            PatchStatus::Unchanged => println!("{} already consistent", report.slug),
        }
    }
    let applied = reports.iter().filter(|r| r.status == PatchStatus::Applied).count();
    println!("\n{applied} of {} patches applied", reports.len());
    Ok(())
}

pub fn update_templates(store: &TestStore, slug: Option<&str>) -> Result<()> {
    let sets = match slug {
        Some(slug) => vec![
            catalog::get_template_set(slug)
                .ok_or_else(|| PatchError::UnknownQuestionnaire(slug.to_string()))?,
        ],
        None => catalog::all_template_sets(),
    };

    let reports = apply_template_updates(store, &sets)?;
    for report in &reports {
        match report.status {
            UpdateStatus::Updated => println!("updated {}.json", report.slug),
            UpdateStatus::SkippedMissing => {
                println!("file not found: {}.json, skipped", report.slug);
            }
        }
    }
    let updated = reports.iter().filter(|r| r.status == UpdateStatus::Updated).count();
    println!("\n{updated} updated, {} skipped", reports.len() - updated);
    Ok(())
}

pub fn check(store: &TestStore) -> Result<()> {
    let mut total_issues = 0usize;
    for slug in store.list_slugs()? {
        let def = store.load(&slug)?;
        let issues = validate::check(&def);
        if issues.is_empty() {
            println!("{slug}: ok");
        } else {
            println!("{slug}: {} issue(s)", issues.len());
            for issue in &issues {
                println!("  {issue}");
            }
            total_issues += issues.len();
        }
    }

    if total_issues > 0 {
        println!("\n{total_issues} issue(s) found");
    } else {
        println!("\nall questionnaires consistent");
    }
    Ok(())
}
