use crate::error::MoveError;

/// Split a flat action in `0..G^2` into a (width, depth) column.
///
/// The action is two base-G digits with width as the most significant one.
pub fn decode_action(action: usize, grid_size: usize) -> Result<(usize, usize), MoveError> {
    let action_count = grid_size * grid_size;
    if action >= action_count {
        return Err(MoveError::ActionOutOfRange {
            action,
            action_count,
        });
    }
    Ok((action / grid_size, action % grid_size))
}

/// Inverse of [`decode_action`].
pub fn encode_action(width: usize, depth: usize, grid_size: usize) -> Result<usize, MoveError> {
    if width >= grid_size || depth >= grid_size {
        return Err(MoveError::OutOfBounds {
            width,
            depth,
            grid_size,
        });
    }
    Ok(width * grid_size + depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_actions() {
        assert_eq!(decode_action(0, 4), Ok((0, 0)));
        assert_eq!(decode_action(3, 4), Ok((0, 3)));
        assert_eq!(decode_action(4, 4), Ok((1, 0)));
        assert_eq!(decode_action(15, 4), Ok((3, 3)));
        assert_eq!(decode_action(8, 3), Ok((2, 2)));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(
            decode_action(16, 4),
            Err(MoveError::ActionOutOfRange {
                action: 16,
                action_count: 16
            })
        );
    }

    #[test]
    fn test_encode_inverts_decode() {
        let g = 5;
        for action in 0..g * g {
            let (w, d) = decode_action(action, g).unwrap();
            assert_eq!(encode_action(w, d, g), Ok(action));
        }
        assert!(encode_action(5, 0, 5).is_err());
    }
}
