use clap::Parser;
use construction_checksum_core::{
    checksum, fixed_point_round, sum_as_bits, Construction, Material, REGISTER_WIDTH,
};
use std::collections::HashSet;

/// Construction checksum demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "checksum-demo")]
#[command(about = "Bit-register construction checksum demonstration", long_about = None)]
struct Args {
    /// Decimal precision exponent for the standalone adder demo (scales by 10^n)
    #[arg(short, long, default_value_t = 0)]
    precision_exp: i32,

    /// Resistance of the scalar test construction in m²·K/W
    #[arg(short, long, default_value_t = 5000.0)]
    resistance: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    // Standalone adder: 1 + 2 at the requested precision
    let val1 = 1.0_f64;
    let val2 = 2.0_f64;
    let precision = 10f64.powi(args.precision_exp);
    let scaled = [
        fixed_point_round(val1, precision),
        fixed_point_round(val2, precision),
    ];
    println!("Test: {val1} + {val2} = {}", val1 + val2);
    println!("{}", sum_as_bits(&scaled, REGISTER_WIDTH));

    // Four materials whose property sums are all equal (5000); the last two
    // differ from the second only in the ninth fractional digit
    let m1 = Material::new(10.0, 1000.0, 3990.0);
    let m2 = Material::new(20.0, 990.0, 3990.0);
    let m3 = Material::new(20.000000001, 990.0, 3989.999999999);
    let m4 = Material::new(20.0, 990.000000001, 3989.999999999);

    let constructions = [
        Construction::from_materials(vec![m1, m2]),
        Construction::from_materials(vec![m2, m1]),
        Construction::from_resistance(args.resistance),
        Construction::from_materials(vec![m3, m4]),
        Construction::from_materials(vec![m4, m3]),
    ];

    let checksums: Vec<_> = constructions.iter().map(checksum).collect();

    println!();
    println!("Test Constructions Checksum");
    for cs in &checksums {
        println!("{cs}");
    }
    println!();

    let unique: HashSet<_> = checksums.iter().collect();
    println!("Unique values: {}", unique.len());
}
