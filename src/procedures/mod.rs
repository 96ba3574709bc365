/*!
Procedures over stored propositions: rendering, truth tables, and brute-force reasoning.

The reasoning procedures share one engine, an [exhaustive sweep](enumerate) of truth assignments to the relevant atoms.
Each sweep writes assignments into the context valuation and evaluates trees against it, so every procedure here takes the context by `&mut`.
*/

pub mod enumerate;
pub mod equivalence;
pub mod render;
pub mod truth_table;
pub mod validity;
