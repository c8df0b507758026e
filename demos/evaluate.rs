use mkad_distance::{Coordinate, DistanceCalculator, Evaluation};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <longitude> <latitude>", args[0]);
        std::process::exit(1);
    }

    let coordinate = Coordinate::new(args[1].parse()?, args[2].parse()?);

    let calculator = DistanceCalculator::mkad()?;

    let geometry = calculator.geometry();
    let bbox = geometry.bounding_box();
    println!("=== MKAD ===");
    println!("Points: {}", geometry.points().len());
    println!(
        "Centroid: lon={:.6} lat={:.6}",
        geometry.centroid().lon,
        geometry.centroid().lat
    );
    println!(
        "Bounds: W={:.6} S={:.6} E={:.6} N={:.6}",
        bbox.left, bbox.bottom, bbox.right, bbox.top
    );

    println!("\n=== Result ===");
    match calculator.try_evaluate(coordinate)? {
        Evaluation::Inside => println!("{coordinate:?} is inside the MKAD"),
        Evaluation::Outside { distance_km } => {
            println!("{coordinate:?} is {distance_km:.3} km outside the MKAD")
        }
    }

    Ok(())
}
