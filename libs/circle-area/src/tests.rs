//! # Cross-Provider Tests

#![allow(clippy::approx_constant)]

use crate::{
    CircleArea, ClassConstantArea, InterfaceConstantArea, ProviderKind,
    QualifiedInterfaceConstantArea, ShadowedConstantArea,
};
use approx::assert_relative_eq;
use std::sync::Arc;
use std::thread;

const RADII: [f64; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, -3.0, 1.0e3];

fn agreeing() -> Vec<Box<dyn CircleArea>> {
    vec![
        Box::new(ClassConstantArea),
        Box::new(InterfaceConstantArea),
        Box::new(QualifiedInterfaceConstantArea),
    ]
}

#[test]
fn test_agreeing_providers_match_reference_exactly() {
    for provider in agreeing() {
        for r in RADII {
            assert_eq!(provider.calculate(r), 3.14 * r * r);
        }
    }
}

#[test]
fn test_shadowed_provider_uses_two_hundred() {
    for r in RADII {
        assert_eq!(ShadowedConstantArea.calculate(r), 200.0 * r * r);
    }
}

#[test]
fn test_shadowed_provider_diverges_for_nonzero_radius() {
    for r in RADII.into_iter().filter(|r| *r != 0.0) {
        assert_ne!(ShadowedConstantArea.calculate(r), 3.14 * r * r);
    }
}

#[test]
fn test_zero_radius_gives_zero_area() {
    for kind in ProviderKind::ALL {
        assert_eq!(kind.build().calculate(0.0), 0.0, "{kind}");
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    for kind in ProviderKind::ALL {
        let provider = kind.build();
        for r in RADII {
            let first = provider.calculate(r).to_bits();
            for _ in 0..8 {
                assert_eq!(provider.calculate(r).to_bits(), first);
            }
        }
    }
}

#[test]
fn test_fractional_radius_close_to_reference() {
    assert_relative_eq!(ClassConstantArea.calculate(1.5), 7.065, max_relative = 1e-12);
    assert_relative_eq!(ShadowedConstantArea.calculate(1.5), 450.0, max_relative = 1e-12);
}

#[test]
fn test_model_agrees_with_compiled_providers() {
    for kind in ProviderKind::ALL {
        let pi = kind.resolved_pi().unwrap();
        assert_eq!(kind.build().calculate(1.0), pi, "{kind}");
    }
}

#[test]
fn test_providers_shared_across_threads() {
    let providers: Vec<Arc<dyn CircleArea>> = ProviderKind::ALL
        .into_iter()
        .map(|kind| Arc::from(kind.build()))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let providers = providers.clone();
            thread::spawn(move || {
                providers
                    .iter()
                    .map(|p| p.calculate(2.0).to_bits())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<u64> = providers.iter().map(|p| p.calculate(2.0).to_bits()).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
