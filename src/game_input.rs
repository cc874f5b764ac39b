use winit::event::VirtualKeyCode;

use crate::direction::Direction;

/// Player intent, the only input the game core understands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Input {
    Steer(Direction),
    Restart,
}

impl Input {
    // Arrows / WASD steer, Enter / Space restart. Anything else is ignored.
    pub fn from_key(key: VirtualKeyCode) -> Option<Input> {
        let input = match key {
            VirtualKeyCode::Up | VirtualKeyCode::W => Input::Steer(Direction::Up),
            VirtualKeyCode::Down | VirtualKeyCode::S => Input::Steer(Direction::Down),
            VirtualKeyCode::Left | VirtualKeyCode::A => Input::Steer(Direction::Left),
            VirtualKeyCode::Right | VirtualKeyCode::D => Input::Steer(Direction::Right),
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter | VirtualKeyCode::Space => {
                Input::Restart
            }
            _ => return None,
        };
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arrows_and_wasd() {
        assert_eq!(Input::from_key(VirtualKeyCode::Up), Some(Input::Steer(Direction::Up)));
        assert_eq!(Input::from_key(VirtualKeyCode::A), Some(Input::Steer(Direction::Left)));
        assert_eq!(Input::from_key(VirtualKeyCode::S), Some(Input::Steer(Direction::Down)));
        assert_eq!(Input::from_key(VirtualKeyCode::Right), Some(Input::Steer(Direction::Right)));
    }

    #[test]
    fn maps_restart_keys() {
        assert_eq!(Input::from_key(VirtualKeyCode::Return), Some(Input::Restart));
        assert_eq!(Input::from_key(VirtualKeyCode::Space), Some(Input::Restart));
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(Input::from_key(VirtualKeyCode::Q), None);
        assert_eq!(Input::from_key(VirtualKeyCode::Escape), None);
    }
}
