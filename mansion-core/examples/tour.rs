//! Walk every branch of the mansion and print what the ledger concludes.

use mansion_core::{Direction, InvestigationSession, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use Direction::{Left, Right};

    println!("=== Touring the Mansion ===\n");

    let mut session = InvestigationSession::new(SessionConfig::default());
    println!("{}", session.begin()?);

    let routes: [&[Direction]; 4] = [
        &[Left, Left],
        &[Left, Right],
        &[Right, Left],
        &[Right, Right, Left],
    ];

    for route in routes {
        println!("\n-- back to the entry hall --");
        println!("{}", session.begin()?);
        for &direction in route {
            println!("{}", session.move_to(direction)?);
        }
    }

    println!("\n{}", session.review());
    println!("\n{}", session.verdict());
    println!("\nRooms entered: {}", session.visits());
    Ok(())
}
