//! Single disc transfer between two pegs.

use tracing::debug;

use crate::error::MoveError;
use crate::peg::Peg;
use crate::types::Disc;

/// Move the top disc of `from` onto `to` and announce it on stdout.
///
/// A rejected placement puts the disc back on `from`, so a failed move
/// leaves both pegs exactly as they were.
pub fn move_disc(from: &mut Peg, to: &mut Peg) -> Result<Disc, MoveError> {
    let disc = from.pop().ok_or_else(|| MoveError::EmptySource {
        from: from.name().to_string(),
    })?;

    if !to.push(disc) {
        let restored = from.push(disc);
        debug_assert!(restored, "popped disc must fit back on its source");
        return Err(MoveError::InvalidMove {
            disc: disc.size(),
            top: to.top().map(Disc::size).unwrap_or_default(),
            from: from.name().to_string(),
            to: to.name().to_string(),
        });
    }

    println!(
        "Moving disc {} from {} to {}",
        disc,
        from.name(),
        to.name()
    );
    debug!(disc = disc.size(), from = from.name(), to = to.name(), "moved disc");
    Ok(disc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg(name: &str, sizes: &[u32]) -> Peg {
        let mut peg = Peg::new(name);
        for &size in sizes {
            assert!(peg.push(Disc::new(size)));
        }
        peg
    }

    #[test]
    fn moves_top_disc_to_empty_peg() {
        let mut a = peg("A", &[3, 2, 1]);
        let mut b = peg("B", &[]);
        assert_eq!(move_disc(&mut a, &mut b), Ok(Disc::new(1)));
        assert_eq!(a.sizes(), vec![3, 2]);
        assert_eq!(b.sizes(), vec![1]);
    }

    #[test]
    fn empty_source_is_reported() {
        let mut a = peg("A", &[]);
        let mut b = peg("B", &[2]);
        let err = move_disc(&mut a, &mut b).unwrap_err();
        assert_eq!(
            err,
            MoveError::EmptySource {
                from: "A".to_string()
            }
        );
        assert_eq!(b.sizes(), vec![2]);
    }

    #[test]
    fn invalid_move_keeps_disc_on_source() {
        let mut a = peg("A", &[3]);
        let mut b = peg("B", &[2]);
        let err = move_disc(&mut a, &mut b).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                disc: 3,
                top: 2,
                from: "A".to_string(),
                to: "B".to_string(),
            }
        );
        // The disc is restored rather than lost.
        assert_eq!(a.sizes(), vec![3]);
        assert_eq!(b.sizes(), vec![2]);
    }
}
