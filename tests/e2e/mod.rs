// End-to-end tests for the Storybook Backend API
//
// Each test spawns the real router on an ephemeral port with in-memory
// collaborators standing in for the inference endpoints, then talks to it
// over HTTP with a hyper client (or the intake client itself).

mod test_client;
