use rand::{rngs::StdRng, Rng, SeedableRng};

use pvo::{
    codec::{decode, decode_assignment, encode},
    procedures::{compose::compose, enumerate::enumerate, evaluate::evaluate, reduce::reduce},
    structures::truth_vector::TruthVector,
};

const SEED: u64 = 0x7076_6f;

fn random_vector(rng: &mut StdRng, arity: usize) -> TruthVector {
    let values = (0..1 << arity).map(|_| rng.gen::<bool>()).collect();
    TruthVector::from_values(values).expect("power of two length")
}

mod codec {
    use super::*;

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for _ in 0..64 {
            let arity = rng.gen_range(0..10);
            let vector = random_vector(&mut rng, arity);
            let encoding = encode(&vector);

            assert_eq!(decode(&encoding), Ok(vector.clone()));

            let ungrouped = encoding.replace('.', "");
            assert_eq!(ungrouped.len(), vector.len());
            assert_eq!(decode(&ungrouped), Ok(vector));
        }
    }

    #[test]
    fn blocks_are_full_but_for_the_first() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for arity in 0..9 {
            let encoding = encode(&random_vector(&mut rng, arity));
            let blocks = encoding.split('.').collect::<Vec<_>>();

            assert!(blocks[0].len() <= 4);
            assert!(blocks[1..].iter().all(|block| block.len() == 4));
        }
    }

    #[test]
    fn enumerated_assignments_are_readable() {
        for assignment in enumerate(3) {
            let written = assignment
                .iter()
                .map(|value| if *value { 't' } else { 'f' })
                .collect::<String>();
            assert_eq!(decode_assignment(&written), Ok(assignment));
        }
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn total() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for arity in 0..8 {
            let vector = random_vector(&mut rng, arity);
            for (position, assignment) in enumerate(arity).iter().enumerate() {
                assert_eq!(evaluate(&vector, assignment), Ok(vector.values()[position]));
            }
        }
    }

    #[test]
    fn mismatched_arity() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let vector = random_vector(&mut rng, 3);

        assert!(evaluate(&vector, &[true, false]).is_err());
        assert!(evaluate(&vector, &[true, false, true, false]).is_err());
    }
}

mod composition {
    use super::*;

    #[test]
    fn length() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for inner_arity in 0..5 {
            for outer_arity in 1..5 {
                let inner = random_vector(&mut rng, inner_arity);
                let outer = random_vector(&mut rng, outer_arity);
                let composed = compose(&inner, &outer).unwrap();

                assert_eq!(composed.arity(), inner_arity + outer_arity - 1);
                assert_eq!(composed.len(), 1 << (inner_arity + outer_arity - 1));
            }
        }
    }

    #[test]
    fn threads_inner_output_to_last_outer_input() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for _ in 0..16 {
            let inner_arity = rng.gen_range(0..4);
            let outer_arity = rng.gen_range(1..4);
            let inner = random_vector(&mut rng, inner_arity);
            let outer = random_vector(&mut rng, outer_arity);
            let composed = compose(&inner, &outer).unwrap();

            for assignment in enumerate(composed.arity()) {
                let (leading, trailing) = assignment.split_at(outer_arity - 1);

                let mut outer_input = leading.to_vec();
                outer_input.push(evaluate(&inner, trailing).unwrap());

                assert_eq!(
                    evaluate(&composed, &assignment),
                    evaluate(&outer, &outer_input)
                );
            }
        }
    }

    #[test]
    fn self_composition() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for arity in 1..5 {
            let vector = random_vector(&mut rng, arity);
            let composed = compose(&vector, &vector).unwrap();
            assert_eq!(composed.arity(), 2 * arity - 1);
        }
    }

    #[test]
    fn identity() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let identity = decode("tf").unwrap();

        for arity in 0..6 {
            let vector = random_vector(&mut rng, arity);
            assert_eq!(compose(&vector, &identity), Ok(vector.clone()));
        }
    }

    #[test]
    fn single_reduction() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for arity in 0..6 {
            let vector = random_vector(&mut rng, arity);
            assert_eq!(reduce(vec![vector.clone()], 0), Ok(Some(vector)));
        }
    }
}
