// ==========================================
// Quadrant Engine - Demo Database Seeder
// ==========================================
// Resets the database and seeds a small roster, fleet, shift
// history and premises file for manual engine runs
// ==========================================

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local};

use quadrant_engine::db::default_db_path;
use quadrant_engine::domain::personnel::PersonnelRecord;
use quadrant_engine::domain::shift::{ConductorRef, PersonRef, ShiftRecord};
use quadrant_engine::domain::types::{ShiftStatus, VehicleType};
use quadrant_engine::domain::vehicle::VehicleRecord;
use quadrant_engine::repository::{PersonnelRepository, ShiftRepository, VehicleRepository};

fn main() -> Result<(), Box<dyn Error>> {
    let db_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_db_path);

    backup_and_reset_db(&db_path)?;
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let db = db_path.to_string_lossy().to_string();

    let personnel = PersonnelRepository::new(&db)?;
    let vehicles = VehicleRepository::new(&db)?;
    let shifts = ShiftRepository::new(&db)?;

    seed_roster(&personnel)?;
    seed_fleet(&vehicles)?;
    seed_history(&shifts)?;
    seed_premises(&db_path)?;

    println!("Seeded demo data into {}", db_path.display());
    println!("  personnel: {}", personnel.list_all()?.len());
    println!("  vehicles:  {}", vehicles.list_all()?.len());
    println!(
        "  shifts:    {}",
        shifts.list_by_department("logistica")?.len()
    );
    Ok(())
}

fn backup_and_reset_db(db_path: &Path) -> Result<(), Box<dyn Error>> {
    if !db_path.exists() {
        return Ok(());
    }

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_path = format!("{}.bak.{}", db_path.display(), ts);
    fs::copy(db_path, &backup_path)?;
    fs::remove_file(db_path)?;

    eprintln!("Backed up {} -> {}", db_path.display(), backup_path);
    Ok(())
}

fn person(
    id: &str,
    name: &str,
    role: &str,
    is_driver: bool,
    small: bool,
    large: bool,
) -> PersonnelRecord {
    PersonnelRecord {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        department: "logistica".to_string(),
        is_driver,
        drives_small_truck: small,
        drives_large_truck: large,
        available: true,
        max_hours_week: None,
    }
}

fn seed_roster(repo: &PersonnelRepository) -> Result<(), Box<dyn Error>> {
    repo.upsert(&person("p1", "Anna Puig", "responsable", false, false, false))?;
    repo.upsert(&person("p2", "Jordi Mas", "responsable", false, false, false))?;
    repo.upsert(&person("p3", "Marc Vila", "soldat", true, true, false))?;
    repo.upsert(&person("p4", "Joan Serra", "conductor", true, true, true))?;
    repo.upsert(&person("p5", "Laia Camps", "soldat", false, false, false))?;
    repo.upsert(&person("p6", "Pere Soler", "soldat", false, false, false))?;
    repo.upsert(&person("p7", "Núria Font", "soldat", false, false, false))?;

    let mut unavailable = person("p8", "Carla Roca", "soldat", false, false, false);
    unavailable.available = false;
    repo.upsert(&unavailable)?;
    Ok(())
}

fn seed_fleet(repo: &VehicleRepository) -> Result<(), Box<dyn Error>> {
    repo.upsert(&VehicleRecord {
        id: "v1".to_string(),
        plate: "1234-ABC".to_string(),
        vehicle_type: VehicleType::Van,
        conductor_id: Some("p4".to_string()),
        available: true,
    })?;
    repo.upsert(&VehicleRecord {
        id: "v2".to_string(),
        plate: "5678-DEF".to_string(),
        vehicle_type: VehicleType::SmallTruck,
        conductor_id: None,
        available: true,
    })?;
    repo.upsert(&VehicleRecord {
        id: "v3".to_string(),
        plate: "9012-GHJ".to_string(),
        vehicle_type: VehicleType::LargeTruck,
        conductor_id: None,
        available: false,
    })?;
    Ok(())
}

fn seed_history(repo: &ShiftRepository) -> Result<(), Box<dyn Error>> {
    let today = Local::now().date_naive();
    // Two confirmed shifts earlier this week so the fairness ranking
    // has something to chew on.
    let day_a = (today - Duration::days(3)).format("%Y-%m-%d").to_string();
    let day_b = (today - Duration::days(2)).format("%Y-%m-%d").to_string();

    repo.upsert(&ShiftRecord {
        id: "q-demo-1".to_string(),
        event_id: "ev-demo-1".to_string(),
        event_name: "Sopar Finca Miró".to_string(),
        department: "logistica".to_string(),
        status: ShiftStatus::Confirmed,
        start_date: day_a.clone(),
        start_time: Some("17:00".to_string()),
        end_date: day_a,
        end_time: Some("23:00".to_string()),
        location: Some("Finca Miró".to_string()),
        meeting_point: Some("Magatzem".to_string()),
        responsible: Some(PersonRef::new("Anna Puig")),
        conductors: vec![ConductorRef {
            name: "Marc Vila".to_string(),
            plate: Some("5678-DEF".to_string()),
            vehicle_type: Some("small-truck".to_string()),
        }],
        staff: vec![PersonRef::new("Laia Camps")],
        total_workers: Some(3),
        num_drivers: Some(1),
        needs_review: false,
        violations: vec![],
        notes: vec![],
        updated_at: None,
    })?;

    repo.upsert(&ShiftRecord {
        id: "q-demo-2".to_string(),
        event_id: "ev-demo-2".to_string(),
        event_name: "Vermut Mas Blau".to_string(),
        department: "logistica".to_string(),
        status: ShiftStatus::Confirmed,
        start_date: day_b.clone(),
        start_time: Some("11:00".to_string()),
        end_date: day_b,
        end_time: Some("16:00".to_string()),
        location: Some("Mas Blau".to_string()),
        meeting_point: Some("Magatzem".to_string()),
        responsible: Some(PersonRef::new("Jordi Mas")),
        conductors: vec![ConductorRef {
            name: "Joan Serra".to_string(),
            plate: Some("1234-ABC".to_string()),
            vehicle_type: Some("van".to_string()),
        }],
        staff: vec![PersonRef::new("Pere Soler")],
        total_workers: Some(3),
        num_drivers: Some(1),
        needs_review: false,
        violations: vec![],
        notes: vec![],
        updated_at: None,
    })?;
    Ok(())
}

fn seed_premises(db_path: &Path) -> Result<(), Box<dyn Error>> {
    let premises_dir = db_path
        .parent()
        .map(|p| p.join("premises"))
        .unwrap_or_else(|| PathBuf::from("premises"));
    fs::create_dir_all(&premises_dir)?;

    let file = premises_dir.join("premises-logistica.json");
    fs::write(
        &file,
        r#"{
  "restHours": 8,
  "allowMultipleEventsSameDay": false,
  "requireResponsible": true,
  "conditions": [
    { "locations": ["Finca Miró"], "responsible": "Anna Puig" }
  ]
}
"#,
    )?;
    eprintln!("Wrote premises file {}", file.display());
    Ok(())
}
