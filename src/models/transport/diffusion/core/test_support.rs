use super::DiffusionInputs;

/// Exchanges the roles of components A and B.
pub(super) fn swapped(inputs: &DiffusionInputs) -> DiffusionInputs {
    DiffusionInputs {
        x_a: 1.0 - inputs.x_a,
        d_ab_0: inputs.d_ba_0,
        d_ba_0: inputs.d_ab_0,
        q_a: inputs.q_b,
        q_b: inputs.q_a,
        r_a: inputs.r_b,
        r_b: inputs.r_a,
        a_ab: inputs.a_ba,
        a_ba: inputs.a_ab,
        temperature: inputs.temperature,
        d_exp: inputs.d_exp,
    }
}

/// An equimolar mixture of two species with identical size, shape, and no interaction energy.
pub(super) fn equal_components() -> DiffusionInputs {
    DiffusionInputs {
        x_a: 0.5,
        d_ab_0: 1.0e-5,
        d_ba_0: 2.0e-5,
        q_a: 1.2,
        q_b: 1.2,
        r_a: 1.1,
        r_b: 1.1,
        a_ab: 0.0,
        a_ba: 0.0,
        temperature: 300.0,
        d_exp: 1.0e-5,
    }
}
