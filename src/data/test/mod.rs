mod backup;
mod schedule;
