use life_torus::{board::Board, draw, pattern::Pattern};

use rand::rngs::StdRng;
use rand::SeedableRng;

const BOARD_SIZE: usize = 8;
const GENERATIONS: u32 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args().nth(1);
    let mut rng = StdRng::from_entropy();

    let mut front = Board::new(BOARD_SIZE, BOARD_SIZE)?;
    let mut back = Board::new(BOARD_SIZE, BOARD_SIZE)?;

    let pattern = Pattern::resolve(name.as_deref());
    pattern.draw(&mut front, &mut rng);
    println!("{}", pattern.label());

    for _ in 0..GENERATIONS {
        print!("{}", draw::render(&front));
        front.step_into(&mut back)?;
        std::mem::swap(&mut front, &mut back);
    }
    Ok(())
}
