//! Unit tests for ring-core primitives.

#[cfg(test)]
mod ring {
    use crate::Ring;

    #[test]
    fn wrap_and_advance() {
        let ring = Ring::new(10);
        assert_eq!(ring.wrap(3), 3);
        assert_eq!(ring.wrap(10), 0);
        assert_eq!(ring.wrap(23), 3);
        assert_eq!(ring.advance(8, 5), 3);
        assert_eq!(ring.advance(0, 0), 0);
    }

    #[test]
    fn distance_ahead_wraps() {
        let ring = Ring::new(10);
        assert_eq!(ring.distance_ahead(3, 5), 2);
        assert_eq!(ring.distance_ahead(5, 3), 8);
        assert_eq!(ring.distance_ahead(7, 7), 0);
    }

    #[test]
    fn gaps_interior_and_wraparound() {
        let ring = Ring::new(20);
        // Vehicles at 2, 5, 19: gaps 2, 13, and 2 (19 → 2 across the seam).
        assert_eq!(ring.gaps(&[2, 5, 19]), vec![2, 13, 2]);
    }

    #[test]
    fn gaps_single_vehicle_sees_whole_ring() {
        let ring = Ring::new(20);
        assert_eq!(ring.gaps(&[0]), vec![19]);
        assert_eq!(ring.gaps(&[13]), vec![19]);
    }

    #[test]
    fn gaps_full_road_all_zero() {
        let ring = Ring::new(4);
        assert_eq!(ring.gaps(&[0, 1, 2, 3]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn gaps_empty_road() {
        let ring = Ring::new(4);
        assert!(ring.gaps(&[]).is_empty());
    }

    #[test]
    #[should_panic]
    fn zero_length_ring_panics() {
        let _ = Ring::new(0);
    }
}

#[cfg(test)]
mod step {
    use crate::Timestep;

    #[test]
    fn arithmetic() {
        let t = Timestep(10);
        assert_eq!(t + 5, Timestep(15));
        assert_eq!(t.offset(3), Timestep(13));
        assert_eq!(Timestep(15) - Timestep(10), 5u64);
        assert_eq!(Timestep(15).since(Timestep(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Timestep(7).to_string(), "t7");
    }
}

#[cfg(test)]
mod state {
    use crate::{Ring, RingError, RoadState, SortedVehicles};

    #[test]
    fn validate_accepts_distinct_in_range() {
        let ring = Ring::new(10);
        let state = RoadState::new(vec![0, 4, 9], vec![0, 1, 2]);
        assert!(state.validate(ring).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_positions() {
        let ring = Ring::new(10);
        let state = RoadState::new(vec![3, 7, 3], vec![0, 0, 0]);
        match state.validate(ring) {
            Err(RingError::DuplicatePosition(3)) => {}
            other => panic!("expected DuplicatePosition(3), got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_out_of_range_position() {
        let ring = Ring::new(10);
        let state = RoadState::new(vec![10], vec![0]);
        assert!(matches!(
            state.validate(ring),
            Err(RingError::PositionOutOfRange { position: 10, .. })
        ));
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let ring = Ring::new(10);
        let state = RoadState::new(vec![1, 2], vec![0]);
        assert!(matches!(
            state.validate(ring),
            Err(RingError::VehicleCountMismatch { .. })
        ));
    }

    #[test]
    fn occupancy_row_marks_vehicles() {
        let ring = Ring::new(5);
        let state = RoadState::new(vec![0, 3], vec![0, 0]);
        assert_eq!(state.occupancy_row(ring), vec![1, 0, 0, 1, 0]);
    }

    #[test]
    fn sorted_view_orders_by_position() {
        let state = RoadState::new(vec![7, 2, 5], vec![10, 20, 30]);
        let sorted = SortedVehicles::from_state(&state);
        assert_eq!(sorted.positions, vec![2, 5, 7]);
        assert_eq!(sorted.velocities, vec![20, 30, 10]);
        assert_eq!(sorted.order, vec![1, 2, 0]);
    }

    #[test]
    fn scatter_restores_original_indexing() {
        let state = RoadState::new(vec![7, 2, 5], vec![10, 20, 30]);
        let roundtrip = SortedVehicles::from_state(&state).into_state();
        assert_eq!(roundtrip, state);
    }

    #[test]
    fn scatter_carries_updates_to_right_vehicle() {
        let state = RoadState::new(vec![7, 2, 5], vec![0, 0, 0]);
        let mut sorted = SortedVehicles::from_state(&state);
        // Advance the vehicle at cell 2 (original index 1) by one cell.
        sorted.positions[0] += 1;
        sorted.velocities[0] = 1;
        let next = sorted.into_state();
        assert_eq!(next.positions, vec![7, 3, 5]);
        assert_eq!(next.velocities, vec![0, 1, 0]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let a: u64 = root1.child(0).random();
        let b: u64 = root2.child(1).random();
        assert_ne!(a, b, "seeds for adjacent replications should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(0..10);
            assert!(v < 10);
        }
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SimRng::new(7);
        let mut cells: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut cells);
        let mut sorted = cells.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }
}
