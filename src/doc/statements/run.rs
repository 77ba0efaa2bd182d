/*!
# `RUN`

## Purpose
Start the program at its first line.

## Remarks
Variables are not cleared. Use `CLEAR` for a fresh start.
Running an empty program does nothing.
Every line may run at most `--line-limit` times per `RUN`;
going over ends with `EXECUTION LIMIT EXCEEDED`.

## Example
```text
10 PRINT 1
RUN
1
```

*/
