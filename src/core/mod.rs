pub mod menu;
pub mod runner;  // Terminal event loop
pub mod surface; // Drawing capability handed to the engine
pub mod words;   // Word sources
