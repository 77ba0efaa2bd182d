/*!
# `PRINT <expression>`

## Purpose
Output the value of an expression to the terminal.

## Remarks
Each `PRINT` writes exactly one integer followed by a newline.
There are no string literals or print zones.

## Example
```text
10 LET A = 7
20 PRINT A * 6
RUN
42
```

*/
