use folio_motion::{Phase, StepSequencer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn visible_never_exceeds_len(len in 0_usize..32, ticks in 0_usize..256) {
        let mut seq = StepSequencer::new(len);
        for _ in 0..ticks {
            seq.tick();
            prop_assert!(seq.visible() <= len);
        }
    }

    #[test]
    fn visible_only_moves_by_one_or_clears(len in 1_usize..32, ticks in 0_usize..256) {
        let mut seq = StepSequencer::new(len);
        let mut before = seq.visible();
        for _ in 0..ticks {
            seq.tick();
            let after = seq.visible();
            prop_assert!(after == before + 1 || after == before || after == 0);
            before = after;
        }
    }

    #[test]
    fn resetting_implies_full_reveal(len in 0_usize..32, ticks in 0_usize..256) {
        let mut seq = StepSequencer::new(len);
        for _ in 0..ticks {
            seq.tick();
            if seq.is_resetting() {
                prop_assert_eq!(seq.visible(), len);
            }
        }
    }

    #[test]
    fn cycle_length_is_len_plus_two(len in 1_usize..32) {
        let mut seq = StepSequencer::new(len);
        let start = seq;
        let mut ticks = 0_usize;
        loop {
            seq.tick();
            ticks += 1;
            if seq == start {
                break;
            }
            prop_assert!(ticks < 1000, "cycle never closed");
        }
        prop_assert_eq!(ticks, len + 2);
    }

    #[test]
    fn holding_only_at_full_reveal(len in 1_usize..32, ticks in 0_usize..256) {
        let mut seq = StepSequencer::new(len);
        for _ in 0..ticks {
            if seq.tick() == Phase::Holding {
                prop_assert_eq!(seq.visible(), len);
            }
        }
    }
}
