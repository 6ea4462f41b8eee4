use pegsweep2d::simulation::{PegBoard, PegBoardConfig, Simulation, SimulationConfig, StepEvent};

const DT: f32 = 1.0 / 60.0;
const MAX_STEPS: usize = 60 * 30;

fn main() {
    for rotated in [false, true] {
        let config = PegBoardConfig {
            rotated,
            ..PegBoardConfig::default()
        };
        let board = PegBoard::new(config).expect("the default board is valid");
        let floor_top = board.floor().center.y - board.floor().half_extents.y;
        let mut sim = Simulation::new(board, SimulationConfig::default())
            .expect("the default simulation parameters are valid");
        let mut num_bounces = 0;

        for step in 0..MAX_STEPS {
            match sim.step(DT) {
                StepEvent::Bounced(impact) => {
                    num_bounces += 1;

                    if impact.peg == sim.board().pegs().len() - 1 {
                        let x = sim.position().x;
                        println!(
                            "[rotated: {}] landed at x = {:.1} after {} steps and {} bounces, score: {:?}",
                            rotated,
                            x,
                            step + 1,
                            num_bounces,
                            sim.board().score_at(x)
                        );
                        break;
                    }
                }
                StepEvent::Reset => {
                    println!("[rotated: {}] the ball left the board, reset.", rotated);
                }
                StepEvent::Moved => {}
            }
        }

        println!(
            "[rotated: {}] final position: {:?} (floor top at y = {})",
            rotated,
            sim.position(),
            floor_top
        );
    }
}
